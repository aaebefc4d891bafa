//! Movement, pickups and enemy collisions
//!
//! Every state change goes through these functions. Input events map 1:1 to
//! `move_player` calls; nothing here depends on time. New positions are
//! sampled before anything is written, so an `Err` leaves the state as it was.

use super::maze::MazeGrid;
use super::spawn::{spawn_atom_position, spawn_enemy_positions};
use super::state::{Direction, GameState, MoveOutcome};
use crate::error::SpawnError;

/// Move the player one cell and resolve pickups and collisions
pub fn move_player(
    state: &mut GameState,
    grid: &MazeGrid,
    direction: Direction,
) -> Result<MoveOutcome, SpawnError> {
    let candidate = state.player + direction.delta();

    if !grid.in_bounds(candidate) || grid.is_wall(candidate) {
        return Ok(MoveOutcome::Blocked);
    }

    // Atom pickup resolves before the enemy check
    let collected = candidate == state.atom;
    if collected {
        let atom = spawn_atom_position(
            grid,
            &state.enemies,
            &mut state.rng,
            state.max_spawn_attempts,
        )?;
        state.atom = atom;
        state.score += 1;
        log::debug!("Atom collected, score {}", state.score);
    }
    state.player = candidate;

    if state.is_enemy(state.player) {
        log::info!(
            "Enemy hit at ({}, {}) with score {}, resetting",
            state.player.x,
            state.player.y,
            state.score
        );
        reset(state, grid)?;
        return Ok(MoveOutcome::Reset { collected });
    }

    Ok(if collected {
        MoveOutcome::Collected { score: state.score }
    } else {
        MoveOutcome::Moved
    })
}

/// Respawn the atom away from walls and current enemies
pub fn spawn_atom(state: &mut GameState, grid: &MazeGrid) -> Result<(), SpawnError> {
    state.atom = spawn_atom_position(
        grid,
        &state.enemies,
        &mut state.rng,
        state.max_spawn_attempts,
    )?;
    Ok(())
}

/// Replace every enemy with a fresh random placement
pub fn spawn_enemies(state: &mut GameState, grid: &MazeGrid) -> Result<(), SpawnError> {
    state.enemies = spawn_enemy_positions(
        grid,
        state.enemy_count,
        &mut state.rng,
        state.max_spawn_attempts,
    )?;
    Ok(())
}

/// Start a new round: centre the player, zero the score, respawn everything.
///
/// The atom is placed against the outgoing enemies, then the enemies are
/// replaced. The centre cell is used as-is even if it is a wall.
pub fn reset(state: &mut GameState, grid: &MazeGrid) -> Result<(), SpawnError> {
    let atom = spawn_atom_position(
        grid,
        &state.enemies,
        &mut state.rng,
        state.max_spawn_attempts,
    )?;
    let enemies = spawn_enemy_positions(
        grid,
        state.enemy_count,
        &mut state.rng,
        state.max_spawn_attempts,
    )?;

    state.player = grid.center();
    state.score = 0;
    state.atom = atom;
    state.enemies = enemies;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{ENEMY_COUNT, MAX_SPAWN_ATTEMPTS};
    use crate::sim::state::Position;
    use proptest::prelude::*;

    fn scripted(player: Position, atom: Position, enemies: Vec<Position>) -> GameState {
        GameState::with_positions(player, atom, enemies, 1234, MAX_SPAWN_ATTEMPTS)
    }

    #[test]
    fn test_move_into_wall_is_blocked() {
        let grid = MazeGrid::default_maze();
        let mut state = scripted(
            Position::new(10, 4),
            Position::new(1, 1),
            vec![Position::new(3, 1)],
        );
        // (10, 3) is a wall
        let outcome = move_player(&mut state, &grid, Direction::Up).unwrap();
        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(state.player, Position::new(10, 4));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_move_off_grid_is_blocked() {
        // Right edge of row 2 is open, so the only obstacle is the boundary
        let grid = MazeGrid::default_maze();
        let mut state = scripted(
            Position::new(19, 2),
            Position::new(1, 1),
            vec![Position::new(3, 1)],
        );
        state.score = 5;
        let outcome = move_player(&mut state, &grid, Direction::Right).unwrap();
        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(state.player, Position::new(19, 2));
        assert_eq!(state.score, 5);
    }

    #[test]
    fn test_move_onto_open_cell() {
        let grid = MazeGrid::default_maze();
        let mut state = scripted(
            Position::new(1, 1),
            Position::new(9, 7),
            vec![Position::new(17, 7)],
        );
        let outcome = move_player(&mut state, &grid, Direction::Right).unwrap();
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(state.player, Position::new(2, 1));
    }

    #[test]
    fn test_collect_atom_from_center() {
        let grid = MazeGrid::default_maze();
        let enemies = vec![
            Position::new(1, 1),
            Position::new(2, 1),
            Position::new(3, 1),
        ];
        let mut state = scripted(grid.center(), Position::new(10, 5), enemies.clone());
        assert_eq!(state.player, Position::new(10, 4));

        // Up is a wall
        assert_eq!(
            move_player(&mut state, &grid, Direction::Up).unwrap(),
            MoveOutcome::Blocked
        );

        let outcome = move_player(&mut state, &grid, Direction::Down).unwrap();
        assert_eq!(outcome, MoveOutcome::Collected { score: 1 });
        assert_eq!(state.score, 1);
        assert_eq!(state.player, Position::new(10, 5));
        assert!(!grid.is_wall(state.atom));
        assert!(!enemies.contains(&state.atom));
        assert_eq!(state.enemies, enemies);
    }

    #[test]
    fn test_enemy_collision_resets() {
        let grid = MazeGrid::default_maze();
        let mut state = scripted(
            Position::new(1, 1),
            Position::new(9, 7),
            vec![Position::new(2, 1), Position::new(5, 5), Position::new(6, 5)],
        );
        state.score = 12;
        let outcome = move_player(&mut state, &grid, Direction::Right).unwrap();
        assert_eq!(outcome, MoveOutcome::Reset { collected: false });
        assert_eq!(state.score, 0);
        assert_eq!(state.player, grid.center());
        assert_eq!(state.enemies.len(), 3);
        assert!(state.enemies.iter().all(|e| !grid.is_wall(*e)));
        assert!(!grid.is_wall(state.atom));
    }

    #[test]
    fn test_atom_and_enemy_on_same_cell() {
        // Atom is collected first, then the enemy still resets the round
        let grid = MazeGrid::default_maze();
        let mut state = scripted(
            Position::new(1, 1),
            Position::new(2, 1),
            vec![Position::new(2, 1)],
        );
        let outcome = move_player(&mut state, &grid, Direction::Right).unwrap();
        assert_eq!(outcome, MoveOutcome::Reset { collected: true });
        assert_eq!(state.score, 0);
        assert_eq!(state.player, grid.center());
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_spawn_helpers_replace_positions() {
        let grid = MazeGrid::default_maze();
        let mut state = scripted(
            Position::new(1, 1),
            Position::new(0, 0),
            vec![Position::new(0, 0); 2],
        );
        spawn_enemies(&mut state, &grid).unwrap();
        assert_eq!(state.enemies.len(), 2);
        assert!(state.enemies.iter().all(|e| !grid.is_wall(*e)));

        spawn_atom(&mut state, &grid).unwrap();
        assert!(!grid.is_wall(state.atom));
        assert!(!state.enemies.contains(&state.atom));
    }

    #[test]
    fn test_reset_twice_is_idempotent() {
        let grid = MazeGrid::default_maze();
        let mut state = GameState::new(&grid, 99, ENEMY_COUNT, MAX_SPAWN_ATTEMPTS).unwrap();
        state.score = 40;
        state.player = Position::new(1, 1);

        reset(&mut state, &grid).unwrap();
        reset(&mut state, &grid).unwrap();
        assert_eq!(state.score, 0);
        assert_eq!(state.player, grid.center());
        assert_eq!(state.enemies.len(), ENEMY_COUNT);
    }

    #[test]
    fn test_reset_keeps_center_even_if_wall() {
        let grid = MazeGrid::default_maze();
        assert!(grid.is_wall(grid.center()));
        let mut state = GameState::new(&grid, 5, ENEMY_COUNT, MAX_SPAWN_ATTEMPTS).unwrap();
        reset(&mut state, &grid).unwrap();
        assert_eq!(state.player, grid.center());
    }

    #[test]
    fn test_reset_failure_leaves_state_untouched() {
        // Only open cell is under an enemy, so the atom has nowhere to go
        let grid = MazeGrid::parse(&["###", "# #", "###"]).unwrap();
        let mut state = GameState::with_positions(
            Position::new(0, 0),
            Position::new(1, 1),
            vec![Position::new(1, 1)],
            3,
            32,
        );
        state.score = 5;

        assert!(reset(&mut state, &grid).is_err());
        assert_eq!(state.player, Position::new(0, 0));
        assert_eq!(state.score, 5);
        assert_eq!(state.atom, Position::new(1, 1));
        assert_eq!(state.enemies, vec![Position::new(1, 1)]);
    }

    #[test]
    fn test_failed_atom_respawn_leaves_move_unapplied() {
        // Player sits on a wall; the one open cell holds both atom and enemy
        let grid = MazeGrid::parse(&["## #"]).unwrap();
        let mut state = GameState::with_positions(
            Position::new(1, 0),
            Position::new(2, 0),
            vec![Position::new(2, 0)],
            3,
            32,
        );

        let err = move_player(&mut state, &grid, Direction::Right).unwrap_err();
        assert!(matches!(err, SpawnError::Exhausted { .. }));
        assert_eq!(state.player, Position::new(1, 0));
        assert_eq!(state.score, 0);
        assert_eq!(state.atom, Position::new(2, 0));
    }

    proptest! {
        #[test]
        fn prop_moves_keep_invariants(
            seed in any::<u64>(),
            moves in prop::collection::vec(0usize..4, 0..200),
        ) {
            let grid = MazeGrid::default_maze();
            let mut state = GameState::new(&grid, seed, ENEMY_COUNT, MAX_SPAWN_ATTEMPTS).unwrap();

            for m in moves {
                let before = state.clone();
                let outcome = move_player(&mut state, &grid, Direction::ALL[m]).unwrap();
                match outcome {
                    MoveOutcome::Blocked => {
                        prop_assert_eq!(state.player, before.player);
                        prop_assert_eq!(state.score, before.score);
                    }
                    MoveOutcome::Moved => {
                        prop_assert_eq!(state.score, before.score);
                        prop_assert!(!grid.is_wall(state.player));
                    }
                    MoveOutcome::Collected { score } => {
                        prop_assert_eq!(score, before.score + 1);
                        prop_assert!(!grid.is_wall(state.atom));
                        prop_assert!(!state.enemies.contains(&state.atom));
                    }
                    MoveOutcome::Reset { .. } => {
                        prop_assert_eq!(state.score, 0);
                        prop_assert_eq!(state.player, grid.center());
                        prop_assert_eq!(state.enemies.len(), ENEMY_COUNT);
                    }
                }
                prop_assert!(grid.in_bounds(state.player));
            }
        }
    }
}
