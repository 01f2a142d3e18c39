//! Greed - catch the gems, dodge the rocks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, cast, spawning, collisions)
//! - `director`: The frame loop tying input, simulation and output together
//! - `services`: Input/render traits the director drives
//! - `platform`: Terminal implementations of those services
//! - `settings`: Data-driven game configuration

pub mod director;
pub mod error;
pub mod platform;
pub mod services;
pub mod settings;
pub mod sim;

pub use director::{Director, LoopState};
pub use error::{GreedError, Result};
pub use settings::Settings;
