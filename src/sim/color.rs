//! RGB colors for actor glyphs

use serde::{Deserialize, Serialize};

/// 24-bit color. Channels are `u8`, so they can never leave [0, 255].
///
/// Deserializing accepts any integers and clamps them like [`Color::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Channels")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const YELLOW: Color = Color::new(255, 255, 0);
    pub const GREEN: Color = Color::new(0, 255, 128);
    pub const GRAY: Color = Color::new(150, 150, 150);
    pub const CYAN: Color = Color::new(0, 200, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from arbitrary integers, clamping each channel
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        let c = |v: i32| v.clamp(0, 255) as u8;
        Self::new(c(r), c(g), c(b))
    }
}

/// Unclamped channels as they appear in settings files
#[derive(Deserialize)]
struct Channels {
    r: i32,
    g: i32,
    b: i32,
}

impl From<Channels> for Color {
    fn from(c: Channels) -> Self {
        Color::clamped(c.r, c.g, c.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}
