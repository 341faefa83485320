use crate::direction::Direction;
use crossterm::style::Color;

/// Amount of pheromone an ant leaves on the cell it departs from.
pub const PHEROMONE_DEPOSIT: u8 = 50;

/// A single cell of the grid.
///
/// An ant's identity is entirely positional: there is no separate ant record,
/// a cell simply has an ant or it does not. The terrain flags are set once at
/// setup and never changed by the simulation loop; food and nest are stored
/// for rendering and future rules but the movement rule ignores them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// An ant currently occupies this cell.
    pub has_ant: bool,
    /// This tick's movement decision has already been applied to the ant in
    /// this cell. Prevents double-processing when an ant migrates into a
    /// not-yet-visited cell during the same sweep.
    pub acted: bool,
    /// The ant's preferred heading, derived from its most recent move.
    /// `None` means no directional preference.
    pub bias: Option<Direction>,
    /// Saturating trail counter, incremented on ant departure and decremented
    /// by 1 every tick.
    pub pheromone: u8,
    pub is_food: bool,
    pub is_wall: bool,
    pub is_nest: bool,
}

impl Cell {
    /// Whether an ant can move into this cell.
    pub fn blocks_movement(&self) -> bool {
        self.is_wall || self.has_ant
    }

    /// Marks the trail left behind by a departing ant, saturating at 255.
    pub fn deposit_pheromone(&mut self) {
        self.pheromone = self.pheromone.saturating_add(PHEROMONE_DEPOSIT);
    }

    /// Decays the trail by one step, flooring at 0.
    pub fn decay_pheromone(&mut self) {
        self.pheromone = self.pheromone.saturating_sub(1);
    }

    pub fn from_char(value: char) -> Cell {
        match value {
            '.' => Cell::default(),
            '#' => Cell {
                is_wall: true,
                ..Cell::default()
            },
            'A' => Cell {
                has_ant: true,
                ..Cell::default()
            },
            '@' => Cell {
                is_food: true,
                ..Cell::default()
            },
            'N' => Cell {
                is_nest: true,
                ..Cell::default()
            },
            _ => panic!("Invalid character value: {}", value),
        }
    }

    pub fn char(&self) -> char {
        if self.is_wall {
            '#'
        } else if self.is_food {
            '@'
        } else if self.has_ant {
            'A'
        } else if self.is_nest {
            'N'
        } else {
            '.'
        }
    }

    pub fn color(&self) -> Color {
        if self.is_wall {
            Color::DarkGrey
        } else if self.is_food {
            Color::Green
        } else if self.has_ant {
            Color::Red
        } else if self.is_nest {
            Color::Yellow
        } else if self.pheromone >= PHEROMONE_DEPOSIT {
            Color::Magenta
        } else if self.pheromone > 0 {
            Color::DarkMagenta
        } else {
            Color::Reset
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_creating_a_default_cell_everything_is_zeroed() {
        let cell = Cell::default();

        assert!(!cell.has_ant);
        assert!(!cell.acted);
        assert!(cell.bias.is_none());
        assert_eq!(cell.pheromone, 0);
        assert!(!cell.is_food);
        assert!(!cell.is_wall);
        assert!(!cell.is_nest);
    }

    #[test]
    fn when_depositing_pheromone_the_counter_saturates_at_the_maximum() {
        let mut cell = Cell::default();

        for _ in 0..6 {
            cell.deposit_pheromone();
        }

        // 6 deposits of 50 would be 300 without saturation
        assert_eq!(cell.pheromone, 255);
    }

    #[test]
    fn when_decaying_pheromone_the_counter_floors_at_zero() {
        let mut cell = Cell {
            pheromone: 1,
            ..Cell::default()
        };

        cell.decay_pheromone();
        assert_eq!(cell.pheromone, 0);

        cell.decay_pheromone();
        assert_eq!(cell.pheromone, 0);
    }

    #[test]
    fn when_checking_movement_blocking_walls_and_ants_block_but_terrain_does_not() {
        assert!(Cell {
            is_wall: true,
            ..Cell::default()
        }
        .blocks_movement());
        assert!(Cell {
            has_ant: true,
            ..Cell::default()
        }
        .blocks_movement());
        assert!(!Cell {
            is_food: true,
            ..Cell::default()
        }
        .blocks_movement());
        assert!(!Cell {
            is_nest: true,
            ..Cell::default()
        }
        .blocks_movement());
        assert!(!Cell::default().blocks_movement());
    }

    #[test]
    fn when_parsing_a_char_the_matching_cell_is_returned() {
        assert!(Cell::from_char('#').is_wall);
        assert!(Cell::from_char('A').has_ant);
        assert!(Cell::from_char('@').is_food);
        assert!(Cell::from_char('N').is_nest);
        assert_eq!(Cell::from_char('.'), Cell::default());
    }

    #[test]
    #[should_panic(expected = "Invalid character value: ?")]
    fn when_parsing_an_unknown_char_a_panic_occurs() {
        Cell::from_char('?');
    }

    #[test]
    fn when_rendering_a_cell_the_char_follows_the_wall_food_ant_precedence() {
        let mut cell = Cell::default();
        assert_eq!(cell.char(), '.');

        cell.is_nest = true;
        assert_eq!(cell.char(), 'N');

        cell.has_ant = true;
        assert_eq!(cell.char(), 'A');

        cell.is_food = true;
        assert_eq!(cell.char(), '@');

        cell.is_wall = true;
        assert_eq!(cell.char(), '#');
    }
}
