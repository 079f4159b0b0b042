//! Shared fixtures and helpers for solver tests.

use ricochet_board::{step, Board};
use ricochet_core::{Cell, Color, Direction, Puzzle, RobotPositions, Symbol, Target, TileSet};

use crate::solution::Move;

/// The standard four-tile starting board used across the test suite.
pub fn s1_puzzle() -> Puzzle {
    Puzzle::new(
        TileSet::new("A3F", "A1B", "A2B", "A4F"),
        RobotPositions {
            yellow: Cell::new(15, 0),
            red: Cell::new(14, 2),
            green: Cell::new(1, 13),
            blue: Cell::new(13, 11),
            silver: None,
        },
        Target::colored(Symbol::Pyramid, Color::Blue).unwrap(),
    )
    .unwrap()
}

/// Alternate setup with the blue pyramid on the bottom-right quadrant.
pub fn s2_puzzle() -> Puzzle {
    Puzzle::new(
        TileSet::new("A1F", "A4F", "A3F", "A2B"),
        RobotPositions {
            yellow: Cell::new(12, 15),
            red: Cell::new(12, 14),
            green: Cell::new(1, 0),
            blue: Cell::new(15, 15),
            silver: None,
        },
        Target::colored(Symbol::Pyramid, Color::Blue).unwrap(),
    )
    .unwrap()
}

/// Replays a move list from the puzzle's start state, checking every move
/// against a step-by-step slide simulation, and returns the final robot
/// cells in packing order.
///
/// The simulation is independent of the generator's ray clipping: it walks
/// cell by cell until a wall or an occupied cell blocks it.
pub fn replay(board: &Board, puzzle: &Puzzle, moves: &[Move]) -> Vec<Cell> {
    let mut cells = puzzle.robots.cells();
    for (i, m) in moves.iter().enumerate() {
        let robot = m.color.index();
        assert!(robot < cells.len(), "move {i} uses an absent robot");
        let stops = slide_stops(board, &cells, robot);
        assert!(
            stops.contains(&m.to),
            "move {i} ({m}) is not a legal slide; legal stops: {stops:?}"
        );
        cells[robot] = m.to;
    }
    cells
}

/// Checks the has-turned rule on a replayed trajectory: the robot's x and
/// y coordinate must each change at least once over its own moves.
pub fn turned_on_both_axes(puzzle: &Puzzle, moves: &[Move], color: Color) -> bool {
    let mut cur = puzzle.robots.cells()[color.index()];
    let (mut horizontal, mut vertical) = (false, false);
    for m in moves.iter().filter(|m| m.color == color) {
        horizontal |= m.to.x() != cur.x();
        vertical |= m.to.y() != cur.y();
        cur = m.to;
    }
    horizontal && vertical
}

fn slide_stops(board: &Board, cells: &[Cell], robot: usize) -> Vec<Cell> {
    let mut stops = Vec::new();
    for dir in Direction::ALL {
        let mut cur = cells[robot];
        loop {
            if board.wall(cur, dir) {
                break;
            }
            let Some(next) = step(cur, dir) else {
                break;
            };
            if cells.iter().any(|&c| c == next) {
                break;
            }
            cur = next;
        }
        if cur != cells[robot] {
            stops.push(cur);
        }
    }
    stops
}
