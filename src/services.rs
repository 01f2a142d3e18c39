//! Input and output collaborators of the game loop
//!
//! The director only talks to these traits; `platform::terminal` provides
//! the real implementations.

use crate::error::Result;
use crate::sim::{Actor, Point};

/// Source of the player's direction for each frame
pub trait InputService {
    /// Displacement for this frame. Implementations keep the vertical
    /// component at zero.
    fn get_direction(&mut self) -> Result<Point>;
}

/// Owns the window and draws actors into a frame buffer
pub trait RenderService {
    fn open_window(&mut self) -> Result<()>;
    fn close_window(&mut self) -> Result<()>;
    fn is_window_open(&self) -> bool;

    /// Playfield width in pixels
    fn get_width(&self) -> i32;
    /// Playfield height in pixels
    fn get_height(&self) -> i32;

    fn clear_buffer(&mut self) -> Result<()>;
    fn draw_actor(&mut self, actor: &Actor) -> Result<()>;

    fn draw_actors<'a>(&mut self, actors: impl IntoIterator<Item = &'a Actor>) -> Result<()>
    where
        Self: Sized,
    {
        for actor in actors {
            self.draw_actor(actor)?;
        }
        Ok(())
    }

    /// Present the frame; blocks until the next frame is due
    fn flush_buffer(&mut self) -> Result<()>;
}
