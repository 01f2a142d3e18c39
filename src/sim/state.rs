//! Game state and core simulation types

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::{Actor, StoneKind};
use super::cast::{BANNER, Cast, PLAYER};
use super::color::Color;
use super::point::{Bounds, Point};
use crate::error::{GreedError, Result};
use crate::settings::Settings;

/// How a stone of one kind looks and what it is worth
#[derive(Debug, Clone, PartialEq)]
pub struct StoneStyle {
    pub glyph: String,
    pub color: Color,
    pub points: i32,
}

/// When new stones may appear
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnPolicy {
    /// Per-tick probability for each kind
    pub chance: f64,
    /// Spawning pauses while this many stones are live
    pub max_stones: usize,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Spawned { kind: StoneKind },
    Collected { kind: StoneKind, points: i32, score: i64 },
    Culled { kind: StoneKind },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub bounds: Bounds,
    pub cell_size: i32,
    pub spawn: SpawnPolicy,
    pub gem: StoneStyle,
    pub rock: StoneStyle,
    pub cast: Cast,
}

impl GameState {
    /// Build the starting cast: player centred on the bottom row, banner top-left
    pub fn new(settings: &Settings, seed: u64) -> Result<Self> {
        settings.validate()?;
        let bounds = settings.bounds()?;
        let cell = settings.cell_size;
        let (cols, rows) = settings.grid();

        let mut cast = Cast::new();
        let player = Actor::player()
            .with_position(Point::new(cols / 2 * cell, (rows - 1) * cell))
            .with_text(settings.player_glyph.clone())
            .with_color(settings.player_color);
        cast.add_actor(PLAYER, player);

        let banner = Actor::score_keeper()
            .with_position(Point::new(cell, 0))
            .with_color(settings.banner_color);
        cast.add_actor(BANNER, banner);

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            bounds,
            cell_size: cell,
            spawn: SpawnPolicy {
                chance: settings.spawn_chance,
                max_stones: settings.max_stones,
            },
            gem: StoneStyle {
                glyph: settings.gem_glyph.clone(),
                color: settings.gem_color,
                points: settings.gem_points,
            },
            rock: StoneStyle {
                glyph: settings.rock_glyph.clone(),
                color: settings.rock_color,
                points: settings.rock_points,
            },
            cast,
        })
    }

    pub fn style(&self, kind: StoneKind) -> &StoneStyle {
        match kind {
            StoneKind::Gem => &self.gem,
            StoneKind::Rock => &self.rock,
        }
    }

    /// Current score held by the banner
    pub fn score(&self) -> Result<i64> {
        self.cast
            .get_first_actor(BANNER)?
            .as_score_keeper()
            .map(|keeper| keeper.score())
            .ok_or_else(|| GreedError::NotFound(BANNER.to_string()))
    }

    /// Build a falling stone at the given position
    pub fn make_stone(&self, kind: StoneKind, position: Point) -> Actor {
        let style = self.style(kind);
        Actor::stone(kind, style.points)
            .with_position(position)
            .with_velocity(Point::new(0, self.cell_size))
            .with_text(style.glyph.clone())
            .with_color(style.color)
    }
}
