//! Game settings
//!
//! Tunable parameters with compiled-in defaults, optionally overridden by
//! a `settings.ron` file next to the executable. A missing file is normal
//! (the defaults are the shipped game); a malformed file is a startup
//! error rather than a silent fallback, so tuning typos don't go unnoticed.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Error type for settings loading
#[derive(Debug)]
pub enum SettingsError {
    /// File I/O error
    Io(String),
    /// RON parse error
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(msg) => write!(f, "failed to read settings: {}", msg),
            SettingsError::Parse(msg) => write!(f, "failed to parse settings: {}", msg),
        }
    }
}

/// All gameplay tunables. Every field has a default, so a settings file
/// only needs to name the values it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Uniform scale applied to every loaded sprite texture
    pub sprite_scale: f32,
    /// Player speed per axis while a movement key is held, px/s
    pub player_speed: f32,
    /// Seconds between enemy spawns
    pub enemy_interval: f32,
    /// Seconds between cloud spawns
    pub cloud_interval: f32,
    /// Inclusive horizontal speed range for enemies, px/s
    pub enemy_speed: (i32, i32),
    /// Inclusive horizontal speed range for clouds, px/s
    pub cloud_speed: (i32, i32),
    pub player_image: String,
    pub enemy_image: String,
    pub cloud_image: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sprite_scale: 0.15,
            player_speed: 5.0,
            enemy_interval: 0.25,
            cloud_interval: 1.0,
            enemy_speed: (-20, 5),
            cloud_speed: (-5, -2),
            player_image: "assets/sprites/raven.png".to_string(),
            enemy_image: "assets/sprites/attack-bird.png".to_string(),
            cloud_image: "assets/sprites/cloud.png".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;

        ron::from_str(&contents).map_err(|e| SettingsError::Parse(e.to_string()))
    }
}
