//! Solver results.

use std::fmt;

use ricochet_core::{Cell, Color};

/// One move of the solution: which robot slid and where it came to rest.
///
/// The direction is implicit; replaying the moves in order from the start
/// state reproduces the full trajectory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub color: Color,
    pub to: Cell,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.color, self.to)
    }
}

/// The outcome of a solver run.
///
/// An empty move list means no solution exists within the depth bound;
/// `num_calc_move` is the number of distinct states stored either way.
#[derive(Clone, Debug)]
pub struct SolveResult {
    pub moves: Vec<Move>,
    pub num_calc_move: usize,
}

impl SolveResult {
    /// Returns true if a solution was found.
    pub fn is_solved(&self) -> bool {
        !self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_display() {
        let m = Move {
            color: Color::Blue,
            to: Cell::new(10, 3),
        };
        assert_eq!(m.to_string(), "blue -> (10,3)");
    }
}
