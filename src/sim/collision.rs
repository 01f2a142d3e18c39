//! Player/stone collisions
//!
//! Everything lives on a grid, so a hit is exact equality of positions.

use super::actor::ActorId;
use super::cast::{BANNER, Cast, PLAYER, STONES};
use super::point::Point;
use super::state::{GameEvent, GameState};
use crate::error::{GreedError, Result};

/// Ids of every stone sitting exactly on `pos`, in draw order
pub fn stones_at(cast: &Cast, pos: Point) -> Vec<ActorId> {
    cast.get_actors(STONES)
        .iter()
        .filter(|a| a.position() == pos)
        .map(|a| a.id())
        .collect()
}

/// Score and remove every stone on the player's cell.
///
/// A stone's points are signed, so gems and rocks both add their value.
pub fn resolve_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) -> Result<()> {
    let player_pos = state.cast.get_first_actor(PLAYER)?.position();

    for id in stones_at(&state.cast, player_pos) {
        let Some(stone) = state.cast.remove_actor(STONES, id) else {
            continue;
        };
        let Some(&s) = stone.as_stone() else {
            continue;
        };
        let score = state
            .cast
            .get_first_actor_mut(BANNER)?
            .add_points(i64::from(s.points()))
            .ok_or_else(|| GreedError::NotFound(BANNER.to_string()))?;
        events.push(GameEvent::Collected {
            kind: s.kind,
            points: s.points(),
            score,
        });
    }
    Ok(())
}
