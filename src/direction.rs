use rand::Rng;

/// Mask containing all 8 compass directions.
pub const ALL_DIRECTIONS: u8 = 0xFF;

/// Represents one of the 8 compass directions an ant can move in.
///
/// Each direction maps to a single bit so that sets of directions compose
/// with bitwise OR/AND and `count_ones` yields the number of directions in
/// a mask. The bits follow the compass clockwise from north.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in compass (bit) order, lowest bit first.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Returns the single-bit mask for this direction.
    pub fn mask(self) -> u8 {
        1 << self.index()
    }

    /// Returns the (Δx, Δy) offset for this direction.
    ///
    /// The y axis grows downward, matching the row order the grid is drawn in.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Applies this direction's offset to a coordinate.
    ///
    /// Returns `None` if the resulting coordinate would be negative. The upper
    /// bounds are the grid's to check, as it is the only one that knows them.
    pub fn apply(self, x: usize, y: usize) -> Option<(usize, usize)> {
        let (dx, dy) = self.offset();
        let nx = x as i32 + dx;
        let ny = y as i32 + dy;

        if nx < 0 || ny < 0 {
            return None;
        }

        Some((nx as usize, ny as usize))
    }

    /// Returns the mask of the 5-direction arc centered on this direction.
    ///
    /// The arc is this direction plus its two neighbors on each side in
    /// compass order, wrapping around the compass. An ant with a heading
    /// prefers to keep going roughly the way it was going rather than
    /// reverse, so the 3 directions opposite its heading are excluded.
    pub fn arc(self) -> u8 {
        let center = self.index();
        let mut mask = 0;

        for step in 0..5 {
            mask |= 1 << ((center + 8 - 2 + step) % 8);
        }

        mask
    }

    fn index(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::NorthEast => 1,
            Direction::East => 2,
            Direction::SouthEast => 3,
            Direction::South => 4,
            Direction::SouthWest => 5,
            Direction::West => 6,
            Direction::NorthWest => 7,
        }
    }
}

/// Returns the mask of directions an ant with the given bias may consider.
///
/// An ant with no bias considers all 8 directions. An ant with a heading is
/// restricted to the 5-direction arc centered on it.
pub fn bias_arc(bias: Option<Direction>) -> u8 {
    match bias {
        None => ALL_DIRECTIONS,
        Some(direction) => direction.arc(),
    }
}

/// Picks a direction uniformly at random among the set bits of `mask`.
///
/// Returns `None` when the mask is empty. The pick is the r-th set bit of
/// the mask scanning from the lowest-order bit upward, for a uniformly
/// drawn r; it is not weighted by pheromone or any other signal.
pub fn choose_direction<R: Rng>(mask: u8, rng: &mut R) -> Option<Direction> {
    if mask == 0 {
        return None;
    }

    let mut remaining = rng.gen_range(0..mask.count_ones());

    for direction in Direction::COMPASS {
        if mask & direction.mask() != 0 {
            if remaining == 0 {
                return Some(direction);
            }
            remaining -= 1;
        }
    }

    unreachable!("a non-empty mask always has a set bit to pick");
}
