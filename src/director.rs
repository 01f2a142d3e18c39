//! The game loop
//!
//! Each frame: read input, advance the simulation, draw. The loop runs while
//! the render service reports an open window. Any error ends it.

use crate::error::{GreedError, Result};
use crate::services::{InputService, RenderService};
use crate::sim::{BANNER, Bounds, GameEvent, GameState, PLAYER, STONES, TickInput, tick};

/// Whether the loop is currently driving frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Controls the sequence of play
pub struct Director<I, R> {
    input: I,
    video: R,
    state: LoopState,
    frame_limit: Option<u64>,
    frames: u64,
}

impl<I: InputService, R: RenderService> Director<I, R> {
    pub fn new(input: I, video: R) -> Self {
        Self {
            input,
            video,
            state: LoopState::Stopped,
            frame_limit: None,
            frames: 0,
        }
    }

    /// Stop after `frames` frames even if the window stays open
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn loop_state(&self) -> LoopState {
        self.state
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_parts(self) -> (I, R) {
        (self.input, self.video)
    }

    /// Open the window and run frames until it closes.
    ///
    /// The window is closed on the way out even when a frame fails; the
    /// frame's error takes precedence over a close error.
    pub fn start_game(&mut self, game: &mut GameState) -> Result<()> {
        if let Err(e) = self.video.open_window() {
            // Undo whatever part of the window setup did succeed
            let _ = self.video.close_window();
            return Err(e);
        }
        self.state = LoopState::Running;
        log::info!("Game started with seed: {}", game.seed);

        let result = self.run(game);

        self.state = LoopState::Stopped;
        let closed = self.video.close_window();
        match &result {
            Ok(()) => log::info!(
                "Game stopped after {} frames, score {}",
                self.frames,
                game.score().unwrap_or_default()
            ),
            Err(e) => log::error!("Game loop aborted after {} frames: {}", self.frames, e),
        }
        result.and(closed)
    }

    fn run(&mut self, game: &mut GameState) -> Result<()> {
        while self.video.is_window_open() {
            if self.frame_limit.is_some_and(|limit| self.frames >= limit) {
                log::info!("Frame limit reached");
                break;
            }
            let input = self.get_inputs()?;
            self.do_updates(game, &input)?;
            self.do_outputs(game)?;
            self.frames += 1;
        }
        Ok(())
    }

    /// Sample the player's direction for this frame
    pub fn get_inputs(&mut self) -> Result<TickInput> {
        Ok(TickInput {
            direction: self.input.get_direction()?,
        })
    }

    /// Advance the simulation inside the render surface's current bounds.
    ///
    /// The surface must hold at least one whole cell and be a whole number
    /// of cells in each direction.
    pub fn do_updates(&mut self, game: &mut GameState, input: &TickInput) -> Result<()> {
        let (width, height) = (self.video.get_width(), self.video.get_height());
        let cell = game.cell_size;
        if width < cell || height < cell || width % cell != 0 || height % cell != 0 {
            return Err(GreedError::InvalidBounds { width, height });
        }
        game.bounds = Bounds::new(width, height)?;
        for event in tick(game, input)? {
            match event {
                GameEvent::Collected { kind, points, score } => log::debug!(
                    "Tick {}: caught {} ({:+}), score {}",
                    game.time_ticks,
                    kind.as_str(),
                    points,
                    score
                ),
                other => log::trace!("Tick {}: {:?}", game.time_ticks, other),
            }
        }
        Ok(())
    }

    /// Draw stones, then the player, then the score banner
    pub fn do_outputs(&mut self, game: &GameState) -> Result<()> {
        self.video.clear_buffer()?;
        self.video.draw_actors(game.cast.get_actors(STONES))?;
        self.video.draw_actor(game.cast.get_first_actor(PLAYER)?)?;
        self.video.draw_actors(game.cast.get_actors(BANNER))?;
        self.video.flush_buffer()
    }
}
