//! Configuration errors
//!
//! The simulation itself never fails mid-round; everything that can go wrong
//! is caught when a round is built.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("map dimensions must be finite and fit a starting hole, got {width}x{height}")]
    InvalidMapSize { width: f32, height: f32 },
    #[error("round time must be positive and finite, got {0}")]
    InvalidRoundTime(f32),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
