//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - State changes only through the controller functions
//! - No rendering or platform dependencies

pub mod controller;
pub mod maze;
pub mod spawn;
pub mod state;

pub use controller::{move_player, reset, spawn_atom, spawn_enemies};
pub use maze::{Cell, DEFAULT_LAYOUT, MazeGrid};
pub use spawn::{spawn_atom_position, spawn_enemy_positions};
pub use state::{Direction, GameState, MoveOutcome, Position, Snapshot};
