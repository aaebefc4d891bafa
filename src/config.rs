//! Game configuration
//!
//! Every field has a default, so an empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// CSS colours used when drawing a frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub wall: String,
    pub player: String,
    pub atom: String,
    pub enemy: String,
    pub text: String,
    /// CSS font shorthand for the score line
    pub font: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#f0f0f0".into(),
            wall: "#333".into(),
            player: "#0cc757".into(),
            atom: "#44da06".into(),
            enemy: "#fb330a".into(),
            text: "#000".into(),
            font: "20px Arial".into(),
        }
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// RNG seed; `None` lets the host pick one from the clock
    pub seed: Option<u64>,
    /// Enemies per round
    pub enemy_count: usize,
    /// Samples per entity before spawning gives up
    pub max_spawn_attempts: u32,
    /// Render tick period (ms)
    pub tick_interval_ms: f64,

    // === Canvas ===
    pub cell_size: f32,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            enemy_count: ENEMY_COUNT,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,
            tick_interval_ms: TICK_INTERVAL_MS,

            cell_size: CELL_SIZE,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation or timer can't work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::ZeroSpawnAttempts);
        }
        if self.tick_interval_ms.is_nan() || self.tick_interval_ms <= 0.0 {
            return Err(ConfigError::BadTickInterval(self.tick_interval_ms));
        }
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return Err(ConfigError::BadCellSize(self.cell_size));
        }
        Ok(())
    }

    /// Use the configured seed or fall back to `fallback`
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Load config from the page's `<script id="game-config">` element (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded game config from page");
                    return config;
                }
                Err(e) => log::warn!("Ignoring game config: {}", e),
            }
        }

        log::info!("Using default game config");
        Self::default()
    }

    /// Page element holding the JSON config
    #[cfg(target_arch = "wasm32")]
    const ELEMENT_ID: &'static str = "game-config";

    /// Load config from an optional JSON file path (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: Option<&std::path::Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default game config");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded game config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
