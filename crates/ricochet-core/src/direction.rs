//! Slide directions.

/// One of the four cardinal slide directions.
///
/// The order of [`Direction::ALL`] is the expansion order of the move
/// generator and must stay stable: it is observable in tie-breaks among
/// equal-length solutions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in expansion order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Index into `[T; 4]` per-direction tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The direction rotated 90 degrees clockwise (viewed with y up).
    pub const fn rotated_cw(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }
}
