//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (insertion order within a category)
//! - No rendering or platform dependencies

pub mod actor;
pub mod cast;
pub mod collision;
pub mod color;
pub mod point;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorId, Role, ScoreKeeper, Stone, StoneKind};
pub use cast::{BANNER, Cast, PLAYER, STONES};
pub use collision::{resolve_collisions, stones_at};
pub use color::Color;
pub use point::{Bounds, Point};
pub use state::{GameEvent, GameState, SpawnPolicy, StoneStyle};
pub use tick::{TickInput, tick};
