//! Greed entry point
//!
//! Sets up logging and settings, then runs the game loop in the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use greed::platform::{KeyboardService, VideoService, close_signal};
use greed::sim::GameState;
use greed::{Director, Settings};

#[derive(Parser)]
#[command(name = "greed")]
#[command(about = "Catch falling gems, dodge falling rocks", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Quit after this many frames
    #[arg(long)]
    frames: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::info!("Greed starting...");

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    let seed = cli
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);
    let mut game = GameState::new(&settings, seed).context("building the game")?;

    let closed = close_signal();
    let keyboard = KeyboardService::new(settings.cell_size, closed.clone());
    let video = VideoService::new(&settings, closed);

    let mut director = Director::new(keyboard, video);
    if let Some(frames) = cli.frames {
        director = director.with_frame_limit(frames);
    }
    director.start_game(&mut game)?;

    println!("Final score: {}", game.score()?);
    Ok(())
}
