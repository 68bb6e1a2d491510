//! Round settings
//!
//! Fixed when a round starts. Loaded from JSON by the headless driver.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::catalog::{SKINS, Skin, Theme};

/// Name used when the player leaves theirs blank
pub const DEFAULT_PLAYER_NAME: &str = "You";

/// Round configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Map ===
    pub map_width: f32,
    pub map_height: f32,
    /// Biome controlling the prop mix and spawn layout
    pub theme: Theme,

    // === Round ===
    /// Round duration in seconds
    pub round_time: f32,
    /// Number of bot holes alongside the player
    pub bot_count: usize,

    // === Player ===
    pub player_name: String,
    /// Skin id from the catalog (unknown ids fall back to the first skin)
    pub skin_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            map_width: MAP_WIDTH,
            map_height: MAP_HEIGHT,
            theme: Theme::City,

            round_time: ROUND_TIME,
            bot_count: BOT_COUNT,

            player_name: DEFAULT_PLAYER_NAME.to_string(),
            skin_id: SKINS[0].id.to_string(),
        }
    }
}

impl Settings {
    /// Reject settings a round can't be built from
    pub fn validate(&self) -> Result<(), ConfigError> {
        // A fresh hole has to fit on the map
        let valid_dim = |d: f32| d.is_finite() && d >= 2.0 * PLAYER_START_RADIUS;
        if !valid_dim(self.map_width) || !valid_dim(self.map_height) {
            return Err(ConfigError::InvalidMapSize {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if !self.round_time.is_finite() || self.round_time <= 0.0 {
            return Err(ConfigError::InvalidRoundTime(self.round_time));
        }
        Ok(())
    }

    /// Player display name, falling back when blank
    pub fn display_name(&self) -> &str {
        let trimmed = self.player_name.trim();
        if trimmed.is_empty() {
            DEFAULT_PLAYER_NAME
        } else {
            trimmed
        }
    }

    /// Selected skin, falling back to the first catalog entry
    pub fn skin(&self) -> &'static Skin {
        Skin::find(&self.skin_id).unwrap_or(&SKINS[0])
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: {}x{} {:?}, {} bots, {}s",
            settings.map_width,
            settings.map_height,
            settings.theme,
            settings.bot_count,
            settings.round_time
        );
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
