//! Hole Arena - a growing-hole arena simulation
//!
//! Core modules:
//! - `sim`: Per-frame simulation (map generation, movement, absorption, clock)
//! - `settings`: Round configuration
//! - `ranking`: Standings and round results
//! - `error`: Configuration errors surfaced before a round starts

pub mod error;
pub mod ranking;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use ranking::{RoundResult, Standing};
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Starting (and post-elimination) hole radius
    pub const PLAYER_START_RADIUS: f32 = 30.0;
    /// Player movement per frame
    pub const MAX_VELOCITY: f32 = 6.0;
    /// Bot movement per frame
    pub const BOT_VELOCITY: f32 = 5.5;

    /// Default map dimensions
    pub const MAP_WIDTH: f32 = 3000.0;
    pub const MAP_HEIGHT: f32 = 3000.0;
    /// Default round duration (seconds)
    pub const ROUND_TIME: f32 = 120.0;
    /// Default number of bot holes
    pub const BOT_COUNT: usize = 7;

    /// Bots pick a new wander target when this close on both axes
    pub const BOT_ARRIVE_TOLERANCE: f32 = 20.0;
    /// Pointer offsets shorter than this don't move the player
    pub const POINTER_DEAD_ZONE: f32 = 20.0;

    /// Fall animation shrink per frame
    pub const FALL_STEP: f32 = 0.08;
    /// Fraction of the remaining distance a falling prop closes per frame
    pub const FALL_EASE: f32 = 0.15;
    /// Marker written to `fall_scale` once a prop has been consumed
    pub const FALL_REMOVED: f32 = -1.0;
    /// Hole must exceed the prop size by this much to swallow it
    pub const ABSORB_SIZE_MARGIN: f32 = 2.0;
    /// How much of the prop may still stick out past the hole rim
    pub const ABSORB_OVERLAP: f32 = 0.3;
    /// Rect props collide with `max(width, height) / RECT_SIZE_DIVISOR`
    pub const RECT_SIZE_DIVISOR: f32 = 1.5;
    /// Smallest radius gain from a single prop
    pub const MIN_GROWTH: f32 = 0.1;

    /// Radius lead needed to swallow another hole
    pub const ELIMINATION_MARGIN: f32 = 10.0;
    /// Flat score bonus for swallowing a hole
    pub const ELIMINATION_BONUS: u64 = 200;
    /// Flat radius gain for swallowing a hole
    pub const ELIMINATION_GROWTH: f32 = 5.0;
    /// Respawned holes land at least this far from their eater
    pub const RESPAWN_MIN_DISTANCE: f32 = 500.0;
    /// Rejection sampling cap for respawn placement
    pub const RESPAWN_MAX_ATTEMPTS: u32 = 64;

    /// Chance per frame that a wandering prop picks a new drift
    pub const DRIFT_CHANCE: f64 = 0.05;
    /// Drift velocity range is `±DRIFT_SPEED / 2` per axis
    pub const DRIFT_SPEED: f32 = 0.5;

    /// Entries shown on the in-round leaderboard
    pub const LEADERBOARD_SIZE: usize = 5;
}

/// Clamp a hole center so the whole hole stays on the map
#[inline]
pub fn clamp_to_map(pos: Vec2, radius: f32, map_size: Vec2) -> Vec2 {
    // Not `f32::clamp`: a hole wider than the map would make min > max and panic
    Vec2::new(
        pos.x.min(map_size.x - radius).max(radius),
        pos.y.min(map_size.y - radius).max(radius),
    )
}

/// Wrap a coordinate that left `[0, extent]` onto the opposite edge
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}
