//! Error types shared across the workspace.

use thiserror::Error;

use crate::cell::Cell;

/// Main error type for solver operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A tile id that matches no known quadrant tile.
    #[error("unknown tile '{0}'")]
    UnknownTile(String),

    /// The same tile number was selected for two quadrants.
    #[error("tile number {0} selected more than once")]
    DuplicateTile(u8),

    /// Two robots share a start cell.
    #[error("robots share start cell {0}")]
    DuplicateRobot(Cell),

    /// A robot was placed on one of the walled-off center cells.
    #[error("robot placed on unreachable cell {0}")]
    RobotOffBoard(Cell),

    /// The target specification does not resolve on this board.
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    /// The predecessor map contradicts itself.
    ///
    /// This can only be produced by a solver bug, never by user input;
    /// callers treat it as fatal.
    #[error("inconsistent state: successor has no moved robot")]
    InconsistentState,
}

/// Result type alias for solver operations.
pub type Result<T> = std::result::Result<T, Error>;
