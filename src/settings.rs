//! Game settings
//!
//! Loaded from an optional JSON file; any field left out keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GreedError, Result};
use crate::sim::{Bounds, Color};

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub width: i32,
    /// Playfield height in pixels
    pub height: i32,
    /// Size of one grid cell in pixels (one terminal character)
    pub cell_size: i32,
    /// Frames per second
    pub frame_rate: u32,

    // === Spawning ===
    /// Chance per tick that a gem (and, independently, a rock) appears
    pub spawn_chance: f64,
    /// No spawning while this many stones are falling
    pub max_stones: usize,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,

    // === Scoring ===
    pub gem_points: i32,
    pub rock_points: i32,

    // === Look ===
    pub player_glyph: String,
    pub gem_glyph: String,
    pub rock_glyph: String,
    pub player_color: Color,
    pub gem_color: Color,
    pub rock_color: Color,
    pub banner_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            cell_size: 15,
            frame_rate: 12,

            spawn_chance: 1.0,
            max_stones: 40,
            seed: None,

            gem_points: 1,
            rock_points: -1,

            player_glyph: "#".to_string(),
            gem_glyph: "*".to_string(),
            rock_glyph: "O".to_string(),
            player_color: Color::YELLOW,
            gem_color: Color::GREEN,
            rock_color: Color::GRAY,
            banner_color: Color::WHITE,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| GreedError::Config(format!("{}: {e}", path.display())))?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Playfield bounds used for wrap-around movement
    pub fn bounds(&self) -> Result<Bounds> {
        Bounds::new(self.width, self.height)
    }

    /// Grid size in cells (columns, rows)
    pub fn grid(&self) -> (i32, i32) {
        (self.width / self.cell_size, self.height / self.cell_size)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds()?;
        if self.cell_size <= 0 || self.width % self.cell_size != 0 || self.height % self.cell_size != 0 {
            return Err(GreedError::Config(format!(
                "cell_size {} must be positive and divide {}x{}",
                self.cell_size, self.width, self.height
            )));
        }
        if self.frame_rate == 0 {
            return Err(GreedError::Config("frame_rate must be positive".to_string()));
        }
        if self.gem_points <= 0 || self.rock_points >= 0 {
            return Err(GreedError::Config(format!(
                "gem_points {} must be positive and rock_points {} negative",
                self.gem_points, self.rock_points
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(GreedError::Config(format!(
                "spawn_chance {} must be within [0, 1]",
                self.spawn_chance
            )));
        }
        Ok(())
    }
}
