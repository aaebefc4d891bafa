//! Game state and core simulation types

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::maze::MazeGrid;
use super::spawn::{spawn_atom_position, spawn_enemy_positions};
use crate::error::SpawnError;

/// Grid position: `x` is the column, `y` the row
pub type Position = IVec2;

/// One of the four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step for this direction (screen coords, y grows downward)
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// Map a browser `KeyboardEvent.key` to a direction
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// What a single move did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target was a wall or off the grid; nothing changed
    Blocked,
    /// Player stepped onto an empty cell
    Moved,
    /// Player picked up the atom; carries the new score
    Collected { score: u64 },
    /// Player ran into an enemy and the round restarted
    Reset { collected: bool },
}

/// Read-only copy of everything the renderer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player: Position,
    pub atom: Position,
    pub enemies: Vec<Position>,
    pub score: u64,
}

/// Complete simulation state.
///
/// Read-only outside the crate; changes go through `sim::controller`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) player: Position,
    pub(crate) atom: Position,
    pub(crate) enemies: Vec<Position>,
    pub(crate) score: u64,
    /// Number of enemies placed on every (re)spawn
    pub(crate) enemy_count: usize,
    /// Samples per entity before spawning fails
    pub(crate) max_spawn_attempts: u32,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Fresh state: player at the maze centre, random atom and enemies
    pub fn new(
        grid: &MazeGrid,
        seed: u64,
        enemy_count: usize,
        max_spawn_attempts: u32,
    ) -> Result<Self, SpawnError> {
        let mut rng = Pcg32::seed_from_u64(seed);

        // Atom first against an empty enemy list, then enemies (startup order)
        let atom = spawn_atom_position(grid, &[], &mut rng, max_spawn_attempts)?;
        let enemies = spawn_enemy_positions(grid, enemy_count, &mut rng, max_spawn_attempts)?;

        Ok(Self {
            player: grid.center(),
            atom,
            enemies,
            score: 0,
            enemy_count,
            max_spawn_attempts,
            rng,
        })
    }

    /// Build a state with explicit positions (for scripted scenarios)
    pub fn with_positions(
        player: Position,
        atom: Position,
        enemies: Vec<Position>,
        seed: u64,
        max_spawn_attempts: u32,
    ) -> Self {
        Self {
            player,
            atom,
            enemy_count: enemies.len(),
            enemies,
            score: 0,
            max_spawn_attempts,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn atom(&self) -> Position {
        self.atom
    }

    pub fn enemies(&self) -> &[Position] {
        &self.enemies
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn enemy_count(&self) -> usize {
        self.enemy_count
    }

    /// True if any enemy stands on `pos`
    pub fn is_enemy(&self, pos: Position) -> bool {
        self.enemies.contains(&pos)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            player: self.player,
            atom: self.atom,
            enemies: self.enemies.clone(),
            score: self.score,
        }
    }
}
