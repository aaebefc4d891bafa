//! Random placement of atoms and enemies
//!
//! Rejection sampling over the whole grid, capped at `max_attempts` samples
//! per entity so a fully blocked maze fails instead of spinning forever.

use rand::Rng;

use super::maze::MazeGrid;
use super::state::Position;
use crate::error::{SpawnError, SpawnKind};

/// Uniformly random in-bounds cell
fn sample_cell<R: Rng>(grid: &MazeGrid, rng: &mut R) -> Position {
    let (w, h) = grid.dimensions();
    Position::new(rng.random_range(0..w as i32), rng.random_range(0..h as i32))
}

/// Sample until `accept` holds, or give up after `max_attempts`
fn sample_until<R, F>(
    grid: &MazeGrid,
    rng: &mut R,
    kind: SpawnKind,
    max_attempts: u32,
    accept: F,
) -> Result<Position, SpawnError>
where
    R: Rng,
    F: Fn(Position) -> bool,
{
    for _ in 0..max_attempts {
        let pos = sample_cell(grid, rng);
        if accept(pos) {
            return Ok(pos);
        }
    }
    log::warn!("Gave up placing {} after {} attempts", kind, max_attempts);
    Err(SpawnError::Exhausted {
        kind,
        attempts: max_attempts,
    })
}

/// Pick an atom cell that is neither a wall nor under an enemy
pub fn spawn_atom_position<R: Rng>(
    grid: &MazeGrid,
    enemies: &[Position],
    rng: &mut R,
    max_attempts: u32,
) -> Result<Position, SpawnError> {
    sample_until(grid, rng, SpawnKind::Atom, max_attempts, |pos| {
        !grid.is_wall(pos) && !enemies.contains(&pos)
    })
}

/// Place `count` enemies on non-wall cells. Enemies may share cells with
/// each other and with the atom.
pub fn spawn_enemy_positions<R: Rng>(
    grid: &MazeGrid,
    count: usize,
    rng: &mut R,
    max_attempts: u32,
) -> Result<Vec<Position>, SpawnError> {
    (0..count)
        .map(|_| {
            sample_until(grid, rng, SpawnKind::Enemy, max_attempts, |pos| {
                !grid.is_wall(pos)
            })
        })
        .collect()
}
