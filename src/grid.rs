use crate::cell::Cell;
use crate::direction::Direction;
use crossterm::{
    cursor::Hide,
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use regex::Regex;
use std::io::{stdout, Write};

/// A rectangular sub-region of the grid, used to seed the initial colony.
#[derive(Clone, Copy, Debug)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Region {
        Region {
            x,
            y,
            width,
            height,
        }
    }
}

/// The rectangular grid of cells the simulation runs on.
///
/// Dimensions are fixed at construction; cells are mutated in place by the
/// tick scheduler and never allocated or freed during a run.
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of empty cells with a one-cell-thick wall border.
    ///
    /// # Arguments
    /// * `width` - The number of columns, at least 2.
    /// * `height` - The number of rows, at least 2.
    pub fn new(width: usize, height: usize) -> Grid {
        if width < 2 || height < 2 {
            panic!("Grid must be at least 2x2 to hold its wall border");
        }

        let mut grid = Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        };

        for x in 0..width {
            grid.cells[x].is_wall = true;
            grid.cells[(height - 1) * width + x].is_wall = true;
        }
        for y in 0..height {
            grid.cells[y * width].is_wall = true;
            grid.cells[y * width + width - 1].is_wall = true;
        }

        grid
    }

    /// Creates a bordered grid and optionally seeds a colony of ants over a
    /// rectangular region.
    ///
    /// The region must lie within the grid; the caller is responsible for
    /// clamping it first. Wall cells inside the region are left as walls.
    pub fn with_colony(width: usize, height: usize, colony: Option<Region>) -> Grid {
        let mut grid = Grid::new(width, height);

        if let Some(region) = colony {
            if region.x + region.width > width || region.y + region.height > height {
                panic!("Colony region extends outside the grid");
            }

            for y in region.y..region.y + region.height {
                for x in region.x..region.x + region.width {
                    let cell = &mut grid.cells[y * width + x];
                    if !cell.is_wall {
                        cell.has_ant = true;
                    }
                }
            }
        }

        grid
    }

    /// Parses a grid from the string representation of a map.
    ///
    /// The format is a `rows`/`cols` header followed by one `m ` line per
    /// row, using the same characters the console renderer prints: `#` for
    /// walls, `A` for ants, `@` for food, `N` for nests and `.` for empty
    /// cells. The map is taken literally; no border is stamped.
    pub fn parse(map_contents: &str) -> Grid {
        let metadata = Regex::new(r"rows (\d+)\s+cols (\d+)")
            .unwrap()
            .captures(map_contents)
            .unwrap();

        let height = metadata.get(1).unwrap().as_str().parse().unwrap();
        let width = metadata.get(2).unwrap().as_str().parse().unwrap();

        let mut grid = Grid {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        };

        Regex::new(r"m (.*)")
            .unwrap()
            .captures_iter(map_contents)
            .map(|captures| captures.get(1).unwrap().as_str().trim())
            .enumerate()
            .for_each(|(y, line)| {
                line.chars().enumerate().for_each(|(x, value)| {
                    grid.cells[y * width + x] = Cell::from_char(value);
                });
            });

        grid
    }

    /// Returns the cell at the given coordinate, or `None` if the coordinate
    /// is out of bounds on either axis.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(&self.cells[y * self.width + x])
    }

    /// Returns a mutable reference to the cell at the given coordinate, or
    /// `None` if the coordinate is out of bounds on either axis.
    pub fn cell_at_mut(&mut self, x: usize, y: usize) -> Option<&mut Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(&mut self.cells[y * self.width + x])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the in-bounds neighbor coordinate in the given direction, or
    /// `None` when the neighbor would fall outside the grid.
    pub fn neighbor(&self, x: usize, y: usize, direction: Direction) -> Option<(usize, usize)> {
        let (nx, ny) = direction.apply(x, y)?;

        if nx >= self.width || ny >= self.height {
            return None;
        }

        Some((nx, ny))
    }

    /// Returns the mask of directions whose neighbor is in bounds, not a
    /// wall and not occupied by another ant.
    pub fn valid_neighbors(&self, x: usize, y: usize) -> u8 {
        let mut mask = 0;

        for direction in Direction::COMPASS {
            if let Some((nx, ny)) = self.neighbor(x, y, direction) {
                if !self.cells[ny * self.width + nx].blocks_movement() {
                    mask |= direction.mask();
                }
            }
        }

        mask
    }

    /// Migrates the ant at `from` one cell in the given direction.
    ///
    /// The target cell receives the ant already marked as acted with its bias
    /// set to the direction just taken; the source cell is cleared and its
    /// pheromone bumped to mark the trail left behind. Returns the target
    /// coordinate, or `None` when there is no ant to move or the target is
    /// out of bounds, a wall or occupied.
    pub fn move_ant(&mut self, from: (usize, usize), direction: Direction) -> Option<(usize, usize)> {
        let (x, y) = from;
        let (nx, ny) = self.neighbor(x, y, direction)?;

        if !self.cell_at(x, y)?.has_ant || self.cells[ny * self.width + nx].blocks_movement() {
            return None;
        }

        let target = &mut self.cells[ny * self.width + nx];
        target.has_ant = true;
        target.acted = true;
        target.bias = Some(direction);

        let source = &mut self.cells[y * self.width + x];
        source.has_ant = false;
        source.acted = false;
        source.bias = None;
        source.deposit_pheromone();

        Some((nx, ny))
    }

    /// Returns the coordinates of every cell holding an ant, in row order.
    pub fn ants(&self) -> Vec<(usize, usize)> {
        // Linear scan, like everything else here; grids are small
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| {
                if cell.has_ant {
                    Some((index % self.width, index / self.width))
                } else {
                    None
                }
            })
            .collect()
    }

    pub fn ant_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_ant).count()
    }

    /// Visits every cell once, clearing its acted flag and decaying its
    /// pheromone. The tick scheduler's mandatory post-pass.
    pub fn end_tick(&mut self) {
        for cell in &mut self.cells {
            cell.acted = false;
            cell.decay_pheromone();
        }
    }

    /// Draws the grid to the console.
    pub fn draw(&self, tick: u64) {
        let mut stdout = stdout();

        execute!(
            stdout,
            Clear(ClearType::All),
            Hide,
            Print("Tick: "),
            Print(tick.to_string()),
            Print("\nAnts: "),
            Print(self.ant_count().to_string()),
            Print("\n\n")
        )
        .unwrap();

        for y in 0..self.height {
            for x in 0..self.width {
                let cell = &self.cells[y * self.width + x];
                execute!(
                    stdout,
                    SetForegroundColor(cell.color()),
                    Print(cell.char()),
                    SetForegroundColor(Color::Reset)
                )
                .unwrap();
            }
            execute!(stdout, Print("\n")).unwrap();
        }

        stdout.flush().unwrap();
    }
}
