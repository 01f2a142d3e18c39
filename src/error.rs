//! Error types for Greed

use thiserror::Error;

/// Everything that can stop a frame from completing
#[derive(Debug, Error)]
pub enum GreedError {
    #[error("No actor in category '{0}'")]
    NotFound(String),

    #[error("Invalid playfield bounds: {width}x{height} (both must be positive)")]
    InvalidBounds { width: i32, height: i32 },

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for Greed operations
pub type Result<T> = std::result::Result<T, GreedError>;

impl From<serde_json::Error> for GreedError {
    fn from(err: serde_json::Error) -> Self {
        GreedError::Config(err.to_string())
    }
}
