//! Game instance owned by the host
//!
//! Bundles the maze, the simulation state and the config, and turns host
//! events into controller calls.

use crate::config::GameConfig;
use crate::error::Error;
use crate::platform::{EventQueue, HostEvent};
use crate::renderer::{DrawCommand, build_frame};
use crate::sim::{self, Direction, GameState, MazeGrid, MoveOutcome, Snapshot};

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    grid: MazeGrid,
    state: GameState,
    config: GameConfig,
    seed: u64,
    /// Render ticks processed
    pub ticks: u64,
    /// Enemy collisions so far
    pub resets: u64,
    /// Atoms picked up across all rounds
    pub atoms_collected: u64,
}

impl Game {
    /// New game on the built-in maze
    pub fn new(config: GameConfig, fallback_seed: u64) -> Result<Self, Error> {
        Self::with_grid(MazeGrid::default_maze(), config, fallback_seed)
    }

    /// New game on a custom maze
    pub fn with_grid(
        grid: MazeGrid,
        config: GameConfig,
        fallback_seed: u64,
    ) -> Result<Self, Error> {
        config.validate()?;
        let seed = config.seed_or(fallback_seed);
        let state = GameState::new(&grid, seed, config.enemy_count, config.max_spawn_attempts)?;

        log::info!(
            "Game initialized with seed {} ({}x{} maze, {} enemies)",
            seed,
            grid.width(),
            grid.height(),
            config.enemy_count
        );

        Ok(Self {
            grid,
            state,
            config,
            seed,
            ticks: 0,
            resets: 0,
            atoms_collected: 0,
        })
    }

    pub fn grid(&self) -> &MazeGrid {
        &self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Apply one directional input
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, Error> {
        let outcome = sim::move_player(&mut self.state, &self.grid, direction)?;
        match outcome {
            MoveOutcome::Blocked => log::trace!("{:?} blocked", direction),
            MoveOutcome::Moved => log::trace!("Moved {:?}", direction),
            MoveOutcome::Collected { .. } => self.atoms_collected += 1,
            MoveOutcome::Reset { collected } => {
                if collected {
                    self.atoms_collected += 1;
                }
                self.resets += 1;
            }
        }
        Ok(outcome)
    }

    /// Map a raw key name to a move; other keys are ignored
    pub fn handle_key(&mut self, key: &str) -> Result<Option<MoveOutcome>, Error> {
        match Direction::from_key(key) {
            Some(direction) => self.move_player(direction).map(Some),
            None => Ok(None),
        }
    }

    /// Start over with a fresh round (same RNG stream)
    pub fn restart(&mut self) -> Result<(), Error> {
        sim::reset(&mut self.state, &self.grid)?;
        self.resets += 1;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Draw commands for the current state
    pub fn frame(&self) -> Vec<DrawCommand> {
        build_frame(&self.grid, &self.state.snapshot(), &self.config)
    }

    /// Drain queued events in arrival order.
    ///
    /// Returns how many ticks were seen; the host draws once if it's non-zero.
    pub fn pump(&mut self, queue: &mut EventQueue) -> Result<u32, Error> {
        let mut ticks = 0;
        while let Some(event) = queue.pop() {
            match event {
                HostEvent::Key(direction) => {
                    self.move_player(direction)?;
                }
                HostEvent::Tick => {
                    self.ticks += 1;
                    ticks += 1;
                }
            }
        }
        Ok(ticks)
    }
}
