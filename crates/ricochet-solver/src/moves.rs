//! Successor generation.
//!
//! A move slides one robot in one cardinal direction until it hits a wall
//! or another robot; robots never stop voluntarily. The board's
//! precomputed slide ends bake the walls in, so generation only has to
//! clip each ray against the other robots.
//!
//! Expansion order is robot index ascending, directions north, east,
//! south, west. The search result does not depend on it, but tie-breaks
//! among equal-length solutions do, so the order must stay stable.

use ricochet_board::Board;
use ricochet_core::{Cell, Direction, Packed};
use smallvec::SmallVec;

/// A successor: the robot that moved and the state after the move.
pub type RobotMove<P> = (usize, P);

/// Upper bound on successors per expansion: five robots, four directions.
pub const MAX_MOVES: usize = 20;

/// Enumerates every state reachable from `from` with a single slide.
pub fn successors<P: Packed>(board: &Board, from: &P) -> SmallVec<[RobotMove<P>; MAX_MOVES]> {
    let mut out = SmallVec::new();

    let mut cells = [Cell::default(); 5];
    for (robot, cell) in cells.iter_mut().take(P::ROBOTS).enumerate() {
        *cell = from.cell(robot);
    }
    let robots = &cells[..P::ROBOTS];

    for (r, &c) in robots.iter().enumerate() {
        let (x, y) = (c.x(), c.y());

        // north: clip the ray to just below the nearest robot above
        let mut ty = board.slide_end(c, Direction::North).y();
        for (j, &o) in robots.iter().enumerate() {
            if j != r && o.x() == x && o.y() > y && o.y() <= ty {
                ty = o.y() - 1;
            }
        }
        if ty != y {
            out.push((r, from.with_cell(r, Cell::new(x, ty))));
        }

        // east
        let mut tx = board.slide_end(c, Direction::East).x();
        for (j, &o) in robots.iter().enumerate() {
            if j != r && o.y() == y && o.x() > x && o.x() <= tx {
                tx = o.x() - 1;
            }
        }
        if tx != x {
            out.push((r, from.with_cell(r, Cell::new(tx, y))));
        }

        // south
        let mut ty = board.slide_end(c, Direction::South).y();
        for (j, &o) in robots.iter().enumerate() {
            if j != r && o.x() == x && o.y() < y && o.y() >= ty {
                ty = o.y() + 1;
            }
        }
        if ty != y {
            out.push((r, from.with_cell(r, Cell::new(x, ty))));
        }

        // west
        let mut tx = board.slide_end(c, Direction::West).x();
        for (j, &o) in robots.iter().enumerate() {
            if j != r && o.y() == y && o.x() < x && o.x() >= tx {
                tx = o.x() + 1;
            }
        }
        if tx != x {
            out.push((r, from.with_cell(r, Cell::new(tx, y))));
        }
    }

    out
}
