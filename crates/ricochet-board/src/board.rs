//! The assembled 16x16 board.

use ricochet_core::cell::NUM_FIELDS;
use ricochet_core::{Cell, Direction, Error, Result, Symbol, Target, TileSet};

use crate::tile;

/// A fixed board: four placed quadrant tiles, the outer border and the
/// walled-off 2x2 center.
///
/// All topology queries are O(1) lookups into tables precomputed at build
/// time; the board is immutable afterwards and freely shared across the
/// solver's worker threads.
///
/// # Example
///
/// ```
/// use ricochet_board::Board;
/// use ricochet_core::{Cell, Direction, TileSet};
///
/// let board = Board::new(&TileSet::new("A3F", "A1B", "A2B", "A4F")).unwrap();
/// let end = board.slide_end(Cell::new(0, 0), Direction::North);
/// assert_ne!(end, Cell::new(0, 0));
/// ```
pub struct Board {
    walls: [u8; NUM_FIELDS],
    slide: [[Cell; NUM_FIELDS]; 4],
    targets: Vec<(Cell, Symbol, Option<ricochet_core::Color>)>,
}

impl Board {
    /// Assembles a board from the four quadrant tiles.
    ///
    /// Fails if a tile id is unknown or a tile number is selected twice.
    pub fn new(tiles: &TileSet) -> Result<Board> {
        let mut board = Board {
            walls: [0; NUM_FIELDS],
            slide: [[Cell::default(); NUM_FIELDS]; 4],
            targets: Vec::with_capacity(17),
        };

        for i in 0..16 {
            board.add_wall(Cell::new(i, 0), Direction::South);
            board.add_wall(Cell::new(i, 15), Direction::North);
            board.add_wall(Cell::new(0, i), Direction::West);
            board.add_wall(Cell::new(15, i), Direction::East);
        }
        for x in 7..=8 {
            for y in 7..=8 {
                let center = Cell::new(x, y);
                for dir in Direction::ALL {
                    board.add_wall(center, dir);
                }
            }
        }

        let mut seen_numbers = [false; 5];
        for (rotation, id) in tiles.clockwise().into_iter().enumerate() {
            let def = tile::lookup(id)?;
            if seen_numbers[def.number as usize] {
                return Err(Error::DuplicateTile(def.number));
            }
            seen_numbers[def.number as usize] = true;

            for &(lx, ly, side) in def.walls {
                board.add_wall(rotate(lx, ly, rotation), rotate_side(side, rotation));
            }
            for &(lx, ly, symbol, color) in def.targets {
                board.targets.push((rotate(lx, ly, rotation), symbol, color));
            }
        }

        board.compute_slides();
        Ok(board)
    }

    /// Returns true if a wall blocks leaving `cell` toward `dir`.
    pub fn wall(&self, cell: Cell, dir: Direction) -> bool {
        self.walls[cell.index()] & (1 << dir.index()) != 0
    }

    /// The cell a lone robot reaches sliding from `cell` toward `dir`.
    ///
    /// Walls are baked in, other robots are not; the move generator clips
    /// the ray against them.
    pub fn slide_end(&self, cell: Cell, dir: Direction) -> Cell {
        self.slide[dir.index()][cell.index()]
    }

    /// Resolves a target specification to its cell on this board.
    pub fn target_coord(&self, target: &Target) -> Result<Cell> {
        self.targets
            .iter()
            .find(|&&(_, symbol, color)| symbol == target.symbol && color == target.color)
            .map(|&(cell, _, _)| cell)
            .ok_or_else(|| Error::InvalidTarget(format!("no {target} on this board")))
    }

    /// Lower bound on the number of moves any robot needs to stop on
    /// `target` from each cell, ignoring the other robots.
    ///
    /// One slide from a cell may end anywhere along its ray: the wall end
    /// always, any intermediate cell if a helper robot happens to sit just
    /// beyond it. Relaxing over that "stop anywhere" neighborhood keeps the
    /// bound admissible, so pruning on it preserves optimality. Unreachable
    /// cells (the center block) stay at `u8::MAX`.
    pub fn min_moves(&self, target: Cell) -> [u8; NUM_FIELDS] {
        let mut dist = [u8::MAX; NUM_FIELDS];
        dist[target.index()] = 0;

        let mut level: u8 = 0;
        loop {
            level += 1;
            let mut changed = false;
            for idx in 0..NUM_FIELDS {
                let cell = Cell::from_byte(idx as u8);
                if dist[idx] != u8::MAX || cell.is_center() {
                    continue;
                }
                'dirs: for dir in Direction::ALL {
                    let end = self.slide_end(cell, dir);
                    let mut cur = cell;
                    while cur != end {
                        cur = match step(cur, dir) {
                            Some(next) => next,
                            None => break,
                        };
                        if dist[cur.index()] == level - 1 {
                            dist[idx] = level;
                            changed = true;
                            break 'dirs;
                        }
                    }
                }
            }
            if !changed || level == u8::MAX {
                return dist;
            }
        }
    }

    fn add_wall(&mut self, cell: Cell, dir: Direction) {
        self.walls[cell.index()] |= 1 << dir.index();
        if let Some(neighbor) = step(cell, dir) {
            self.walls[neighbor.index()] |= 1 << opposite(dir).index();
        }
    }

    fn compute_slides(&mut self) {
        let mut slide = [[Cell::default(); NUM_FIELDS]; 4];
        for idx in 0..NUM_FIELDS {
            let cell = Cell::from_byte(idx as u8);
            for dir in Direction::ALL {
                slide[dir.index()][idx] = if cell.is_center() {
                    cell
                } else {
                    self.walk(cell, dir)
                };
            }
        }
        self.slide = slide;
    }

    fn walk(&self, from: Cell, dir: Direction) -> Cell {
        let mut cur = from;
        while !self.wall(cur, dir) {
            match step(cur, dir) {
                Some(next) => cur = next,
                None => break,
            }
        }
        cur
    }
}

/// The neighboring cell toward `dir`, if still on the board.
pub fn step(cell: Cell, dir: Direction) -> Option<Cell> {
    let (x, y) = (cell.x(), cell.y());
    match dir {
        Direction::North if y < 15 => Some(Cell::new(x, y + 1)),
        Direction::East if x < 15 => Some(Cell::new(x + 1, y)),
        Direction::South if y > 0 => Some(Cell::new(x, y - 1)),
        Direction::West if x > 0 => Some(Cell::new(x - 1, y)),
        _ => None,
    }
}

const fn opposite(dir: Direction) -> Direction {
    dir.rotated_cw().rotated_cw()
}

// Canonical tile coordinates describe the top-left quadrant; placement
// rotates them clockwise about the board center, (x, y) -> (y, 15 - x).
fn rotate(lx: u8, ly: u8, rotation: usize) -> Cell {
    let (mut x, mut y) = (lx, ly + 8);
    for _ in 0..rotation {
        (x, y) = (y, 15 - x);
    }
    Cell::new(x, y)
}

fn rotate_side(side: Direction, rotation: usize) -> Direction {
    let mut side = side;
    for _ in 0..rotation {
        side = side.rotated_cw();
    }
    side
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
