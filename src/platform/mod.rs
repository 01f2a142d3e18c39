//! Platform abstraction layer
//!
//! Terminal implementations of the input and render services.

use std::cell::Cell;
use std::rc::Rc;

pub mod terminal;

pub use terminal::{KeyboardService, VideoService};

/// Set when the player asks to quit; shared by keyboard and window
pub type CloseSignal = Rc<Cell<bool>>;

pub fn close_signal() -> CloseSignal {
    Rc::new(Cell::new(false))
}
