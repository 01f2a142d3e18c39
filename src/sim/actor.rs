//! Actors: everything that is drawn and moved on the playfield
//!
//! An actor is one struct with a [`Role`]. Falling stones and the score
//! banner share position, velocity, glyph and color, but only a stone is
//! worth points and only the score keeper accumulates them.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::point::{Bounds, Point};

/// Identity of an actor inside a [`super::Cast`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    /// Id of an actor that has not been added to a cast yet
    pub const UNASSIGNED: ActorId = ActorId(0);
}

/// Stone types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoneKind {
    Gem,
    Rock,
}

impl StoneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoneKind::Gem => "gem",
            StoneKind::Rock => "rock",
        }
    }
}

/// A falling collectible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stone {
    pub kind: StoneKind,
    /// Signed value added to the score when caught (rocks are negative)
    points: i32,
}

impl Stone {
    pub fn new(kind: StoneKind, points: i32) -> Self {
        Self { kind, points }
    }

    pub fn points(&self) -> i32 {
        self.points
    }

    pub fn set_points(&mut self, points: i32) {
        self.points = points;
    }
}

/// The running total shown in the banner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    score: i64,
}

impl ScoreKeeper {
    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn label(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// What an actor is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Player,
    Stone(Stone),
    ScoreKeeper(ScoreKeeper),
}

/// A drawable, movable entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    position: Point,
    velocity: Point,
    text: String,
    color: Color,
    role: Role,
}

impl Actor {
    pub fn new(role: Role) -> Self {
        Self {
            id: ActorId::UNASSIGNED,
            position: Point::ZERO,
            velocity: Point::ZERO,
            text: String::new(),
            color: Color::WHITE,
            role,
        }
    }

    pub fn player() -> Self {
        Self::new(Role::Player)
    }

    pub fn stone(kind: StoneKind, points: i32) -> Self {
        Self::new(Role::Stone(Stone::new(kind, points)))
    }

    /// A score banner starting at zero, with its label already rendered
    pub fn score_keeper() -> Self {
        let keeper = ScoreKeeper::default();
        let mut actor = Self::new(Role::ScoreKeeper(keeper));
        actor.text = keeper.label();
        actor
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub(crate) fn assign_id(&mut self, id: ActorId) {
        self.id = id;
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Point) {
        self.velocity = velocity;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn as_stone(&self) -> Option<&Stone> {
        match &self.role {
            Role::Stone(stone) => Some(stone),
            _ => None,
        }
    }

    pub fn as_stone_mut(&mut self) -> Option<&mut Stone> {
        match &mut self.role {
            Role::Stone(stone) => Some(stone),
            _ => None,
        }
    }

    pub fn as_score_keeper(&self) -> Option<&ScoreKeeper> {
        match &self.role {
            Role::ScoreKeeper(keeper) => Some(keeper),
            _ => None,
        }
    }

    /// Position one step ahead, before wrapping
    #[inline]
    pub fn next_position(&self) -> Point {
        self.position + self.velocity
    }

    /// Advance by one velocity step, wrapping around the playfield edges
    pub fn move_next(&mut self, bounds: Bounds) {
        self.position = bounds.wrap(self.next_position());
    }

    /// Add to the running score and refresh the banner text.
    ///
    /// Returns the new total, or `None` if this actor does not keep score.
    pub fn add_points(&mut self, delta: i64) -> Option<i64> {
        let Role::ScoreKeeper(keeper) = &mut self.role else {
            return None;
        };
        keeper.score += delta;
        let (score, label) = (keeper.score, keeper.label());
        self.text = label;
        Some(score)
    }
}
