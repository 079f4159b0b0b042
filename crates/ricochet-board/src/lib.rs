//! Ricochet Board - static board model
//!
//! Builds a 16x16 board from four quadrant tiles and precomputes everything
//! the search needs from the topology:
//! - slide end cells per cell and direction (walls baked in, robots ignored)
//! - target cell lookup by symbol and color
//! - the minimum-move lower-bound table used for admissibility pruning

mod board;
mod tile;

pub use board::{step, Board};
pub use tile::TileDef;
