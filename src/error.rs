//! Error types
//!
//! Invalid moves are not errors (they are silently blocked). Errors only come
//! from bad maze layouts, bad configuration, or a spawn that can't find a cell.

use thiserror::Error;

/// Maze layout rejected at construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze layout has no rows")]
    Empty,
    #[error("maze row {row} has width {actual}, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Which entity a spawn was attempted for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnKind {
    Atom,
    Enemy,
}

impl std::fmt::Display for SpawnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpawnKind::Atom => f.write_str("atom"),
            SpawnKind::Enemy => f.write_str("enemy"),
        }
    }
}

/// Random placement gave up
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no free cell found for {kind} after {attempts} attempts")]
    Exhausted { kind: SpawnKind, attempts: u32 },
}

/// Configuration rejected while loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("max_spawn_attempts must be at least 1")]
    ZeroSpawnAttempts,
    #[error("tick_interval_ms must be positive, got {0}")]
    BadTickInterval(f64),
    #[error("cell_size must be positive, got {0}")]
    BadCellSize(f32),
}

/// Anything the host can hit while building or running a game
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Spawn(#[from] SpawnError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
