//! Atom Maze - A grid maze arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (maze, spawning, movement, resets)
//! - `renderer`: Frame construction and Canvas 2D drawing
//! - `platform`: Fixed timer and host event queue
//! - `config`: Data-driven game configuration

pub mod config;
pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, Palette};
pub use error::{ConfigError, Error, MazeError, SpawnError, SpawnKind};
pub use game::Game;

/// Game configuration constants
pub mod consts {
    /// Render tick period in milliseconds (10 Hz)
    pub const TICK_INTERVAL_MS: f64 = 100.0;
    /// Maximum ticks per animation frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 4;

    /// Canvas dimensions (pixels)
    pub const CANVAS_WIDTH: u32 = 600;
    pub const CANVAS_HEIGHT: u32 = 400;
    /// Size of one maze cell on screen (pixels)
    pub const CELL_SIZE: f32 = 20.0;

    /// Number of enemies spawned per round
    pub const ENEMY_COUNT: usize = 3;
    /// Samples per entity before spawning gives up
    pub const MAX_SPAWN_ATTEMPTS: u32 = 10_000;
}
