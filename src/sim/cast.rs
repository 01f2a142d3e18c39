//! Registry of live actors, grouped by category
//!
//! Each category keeps its actors in insertion order, which is also the draw
//! order. Removal goes by [`ActorId`] so two stones sharing a cell can never
//! be confused.

use std::collections::BTreeMap;

use super::actor::{Actor, ActorId};
use crate::error::{GreedError, Result};

/// Category holding the single player actor
pub const PLAYER: &str = "player";
/// Category holding falling gems and rocks
pub const STONES: &str = "stones";
/// Category holding the score banner
pub const BANNER: &str = "banner";

/// All live actors
#[derive(Debug, Clone)]
pub struct Cast {
    groups: BTreeMap<String, Vec<Actor>>,
    next_id: u32,
}

impl Default for Cast {
    fn default() -> Self {
        Self::new()
    }
}

impl Cast {
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Append an actor to a category (created on demand) and return its id
    pub fn add_actor(&mut self, category: &str, mut actor: Actor) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        actor.assign_id(id);
        self.groups.entry(category.to_string()).or_default().push(actor);
        id
    }

    /// Remove one actor by id. Removing an absent id is a no-op.
    pub fn remove_actor(&mut self, category: &str, id: ActorId) -> Option<Actor> {
        let group = self.groups.get_mut(category)?;
        let index = group.iter().position(|a| a.id() == id)?;
        Some(group.remove(index))
    }

    pub fn get_first_actor(&self, category: &str) -> Result<&Actor> {
        self.get_actors(category)
            .first()
            .ok_or_else(|| GreedError::NotFound(category.to_string()))
    }

    pub fn get_first_actor_mut(&mut self, category: &str) -> Result<&mut Actor> {
        self.groups
            .get_mut(category)
            .and_then(|group| group.first_mut())
            .ok_or_else(|| GreedError::NotFound(category.to_string()))
    }

    pub fn get_actor(&self, category: &str, id: ActorId) -> Option<&Actor> {
        self.get_actors(category).iter().find(|a| a.id() == id)
    }

    pub fn get_actor_mut(&mut self, category: &str, id: ActorId) -> Option<&mut Actor> {
        self.groups
            .get_mut(category)?
            .iter_mut()
            .find(|a| a.id() == id)
    }

    /// Actors of one category in insertion order (empty if never populated)
    pub fn get_actors(&self, category: &str) -> &[Actor] {
        self.groups.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn get_actors_mut(&mut self, category: &str) -> &mut [Actor] {
        self.groups
            .get_mut(category)
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }

    /// Every actor, grouped by category name, insertion order within a group
    pub fn get_all_actors(&self) -> impl Iterator<Item = &Actor> {
        self.groups.values().flatten()
    }

    /// Snapshot of the ids in a category, safe to iterate while removing
    pub fn actor_ids(&self, category: &str) -> Vec<ActorId> {
        self.get_actors(category).iter().map(Actor::id).collect()
    }

    pub fn len(&self, category: &str) -> usize {
        self.get_actors(category).len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}
