use crate::direction::{bias_arc, choose_direction};
use crate::grid::Grid;
use crate::replay::{create_replay_logger, ReplayLogger};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// The ant colony simulation.
/// Main entry point for advancing the grid one tick at a time.
///
/// Each tick sweeps every cell exactly once, applies the bias-masked random
/// walk to every ant that has not acted yet this tick, and finishes with a
/// post-pass that clears the acted flags and decays the pheromone trails.
/// The grid must not be read while a tick is in progress; `advance_tick`
/// runs to completion before returning.
pub struct Simulation {
    grid: Grid,
    tick: u64,
    replay_logger: Box<dyn ReplayLogger>,
    rng: StdRng,
}

impl Simulation {
    /// Creates a new simulation over the given grid.
    ///
    /// # Arguments
    /// * `grid` - The starting grid, usually built with `Grid::with_colony` or `Grid::parse`.
    /// * `seed` - The seed for the random number generator.
    /// * `replay_filename` - The filename to save the replay of the run to. If `None`, no replay will be saved.
    pub fn new(grid: Grid, seed: u64, replay_filename: Option<String>) -> Simulation {
        let width = grid.width();
        let height = grid.height();

        Simulation {
            grid,
            tick: 0,
            replay_logger: create_replay_logger(replay_filename, width, height),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The grid in its state after the last completed tick.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of completed ticks.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the simulation by one tick, mutating the grid in place.
    pub fn advance_tick(&mut self) {
        for (x, y) in self.sweep_order() {
            self.process_cell(x, y);
        }

        self.grid.end_tick();
        self.replay_logger.log_tick(self.tick, self.grid.ant_count());
        self.tick += 1;
    }

    /// Draws the current grid to the console.
    pub fn draw(&self) {
        self.grid.draw(self.tick);
    }

    /// Saves the replay of the run so far, if a replay filename was given.
    pub fn save_replay(&self) {
        self.replay_logger.save();
    }

    fn process_cell(&mut self, x: usize, y: usize) {
        let bias = match self.grid.cell_at(x, y) {
            Some(cell) if cell.has_ant && !cell.acted => cell.bias,
            _ => return,
        };

        let valid = self.grid.valid_neighbors(x, y) & bias_arc(bias);

        match choose_direction(valid, &mut self.rng) {
            Some(direction) => {
                // The mask guarantees the target is in bounds, passable and empty
                if let Some(to) = self.grid.move_ant((x, y), direction) {
                    self.replay_logger.log_move(self.tick, (x, y), to);
                }
            }
            None => {
                // A blocked ant stays put, loses its momentum and is not
                // reconsidered this tick
                let cell = self.grid.cell_at_mut(x, y).unwrap();
                cell.acted = true;
                cell.bias = None;
            }
        }
    }

    /// The traversal order for the current tick.
    ///
    /// A fixed scan order would let ants systematically outrun or pile up
    /// against the scan direction, so the sweep cycles through 4 orders:
    /// row-major and column-major, each forward and reversed.
    fn sweep_order(&self) -> Vec<(usize, usize)> {
        let width = self.grid.width();
        let height = self.grid.height();

        match self.tick % 4 {
            0 => (0..height)
                .flat_map(|y| (0..width).map(move |x| (x, y)))
                .collect(),
            1 => (0..height)
                .rev()
                .flat_map(|y| (0..width).rev().map(move |x| (x, y)))
                .collect(),
            2 => (0..width)
                .flat_map(|x| (0..height).map(move |y| (x, y)))
                .collect(),
            _ => (0..width)
                .rev()
                .flat_map(|x| (0..height).rev().map(move |y| (x, y)))
                .collect(),
        }
    }
}
