//! Grid coordinates and playfield bounds

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::{GreedError, Result};

/// A position or a per-tick displacement, in playfield pixels
pub type Point = IVec2;

/// Playfield size used for wrap-around movement.
///
/// Only constructible with positive extents, so the modulo in
/// [`Bounds::wrap`] is always well defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    max_x: i32,
    max_y: i32,
}

impl Bounds {
    pub fn new(max_x: i32, max_y: i32) -> Result<Self> {
        if max_x <= 0 || max_y <= 0 {
            return Err(GreedError::InvalidBounds {
                width: max_x,
                height: max_y,
            });
        }
        Ok(Self { max_x, max_y })
    }

    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Wrap a point into `[0, max_x) x [0, max_y)`
    #[inline]
    pub fn wrap(&self, p: Point) -> Point {
        Point::new(p.x.rem_euclid(self.max_x), p.y.rem_euclid(self.max_y))
    }

    pub fn contains(&self, p: Point) -> bool {
        (0..self.max_x).contains(&p.x) && (0..self.max_y).contains(&p.y)
    }
}
