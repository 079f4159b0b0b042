//! Validated puzzle input.

use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::robot::Target;

/// The four quadrant tile ids making up a board, e.g. `"A3F"`.
///
/// Tile ids are opaque to this crate; `ricochet-board` resolves them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileSet {
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
}

impl TileSet {
    pub fn new(
        top_left: impl Into<String>,
        top_right: impl Into<String>,
        bottom_left: impl Into<String>,
        bottom_right: impl Into<String>,
    ) -> Self {
        TileSet {
            top_left: top_left.into(),
            top_right: top_right.into(),
            bottom_left: bottom_left.into(),
            bottom_right: bottom_right.into(),
        }
    }

    /// Tile ids in placement order: top-left, top-right, bottom-right,
    /// bottom-left (clockwise, matching quadrant rotation).
    pub fn clockwise(&self) -> [&str; 4] {
        [
            &self.top_left,
            &self.top_right,
            &self.bottom_right,
            &self.bottom_left,
        ]
    }
}

/// Robot start cells by color. Silver is optional.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RobotPositions {
    pub yellow: Cell,
    pub red: Cell,
    pub green: Cell,
    pub blue: Cell,
    pub silver: Option<Cell>,
}

impl RobotPositions {
    /// Cells in packing order; length 4 or 5 depending on silver.
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![self.yellow, self.red, self.green, self.blue];
        if let Some(silver) = self.silver {
            cells.push(silver);
        }
        cells
    }
}

/// A complete, validated puzzle: board tiles, robot start cells and target.
///
/// # Example
///
/// ```
/// use ricochet_core::{Cell, Color, Puzzle, RobotPositions, Symbol, Target, TileSet};
///
/// let puzzle = Puzzle::new(
///     TileSet::new("A3F", "A1B", "A2B", "A4F"),
///     RobotPositions {
///         yellow: Cell::new(15, 0),
///         red: Cell::new(14, 2),
///         green: Cell::new(1, 13),
///         blue: Cell::new(13, 11),
///         silver: None,
///     },
///     Target::colored(Symbol::Pyramid, Color::Blue).unwrap(),
/// )
/// .unwrap();
/// assert!(!puzzle.has_silver());
/// ```
#[derive(Clone, Debug)]
pub struct Puzzle {
    pub tiles: TileSet,
    pub robots: RobotPositions,
    pub target: Target,
}

impl Puzzle {
    /// Builds a puzzle, rejecting invalid robot placements.
    ///
    /// Tile ids and target existence are validated later by the board
    /// builder, which owns the tile catalog.
    pub fn new(tiles: TileSet, robots: RobotPositions, target: Target) -> Result<Puzzle> {
        let cells = robots.cells();
        for (i, &cell) in cells.iter().enumerate() {
            if cell.is_center() {
                return Err(Error::RobotOffBoard(cell));
            }
            if cells[..i].contains(&cell) {
                return Err(Error::DuplicateRobot(cell));
            }
        }
        Ok(Puzzle {
            tiles,
            robots,
            target,
        })
    }

    /// Returns true when the silver robot takes part.
    pub fn has_silver(&self) -> bool {
        self.robots.silver.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::{Color, Symbol};

    fn robots() -> RobotPositions {
        RobotPositions {
            yellow: Cell::new(15, 0),
            red: Cell::new(14, 2),
            green: Cell::new(1, 13),
            blue: Cell::new(13, 11),
            silver: None,
        }
    }

    fn tiles() -> TileSet {
        TileSet::new("A3F", "A1B", "A2B", "A4F")
    }

    fn target() -> Target {
        Target::colored(Symbol::Pyramid, Color::Blue).unwrap()
    }

    #[test]
    fn valid_puzzle() {
        let puzzle = Puzzle::new(tiles(), robots(), target()).unwrap();
        assert_eq!(puzzle.robots.cells().len(), 4);
    }

    #[test]
    fn silver_widens_the_state() {
        let mut r = robots();
        r.silver = Some(Cell::new(7, 3));
        let puzzle = Puzzle::new(tiles(), r, target()).unwrap();
        assert!(puzzle.has_silver());
        assert_eq!(puzzle.robots.cells().len(), 5);
    }

    #[test]
    fn duplicate_robot_rejected() {
        let mut r = robots();
        r.red = r.yellow;
        assert!(matches!(
            Puzzle::new(tiles(), r, target()),
            Err(Error::DuplicateRobot(_))
        ));
    }

    #[test]
    fn center_cell_rejected() {
        let mut r = robots();
        r.green = Cell::new(8, 8);
        assert!(matches!(
            Puzzle::new(tiles(), r, target()),
            Err(Error::RobotOffBoard(_))
        ));
    }
}
