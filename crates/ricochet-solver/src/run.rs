//! Puzzle entry point.

use ricochet_board::Board;
use ricochet_config::SolverConfig;
use ricochet_core::{Puzzle, Result, P4, P5};

use crate::progress::ProgressSink;
use crate::solution::SolveResult;
use crate::solver::Solver;

/// Builds the board and runs the search, picking the four- or five-robot
/// packed width from the puzzle's silver robot.
///
/// # Example
///
/// ```
/// use ricochet_core::{Cell, Color, Puzzle, RobotPositions, Symbol, Target, TileSet};
/// use ricochet_config::SolverConfig;
/// use ricochet_solver::NullSink;
///
/// let puzzle = Puzzle::new(
///     TileSet::new("A1F", "A4F", "A3F", "A2B"),
///     RobotPositions {
///         yellow: Cell::new(12, 15),
///         red: Cell::new(12, 14),
///         green: Cell::new(1, 0),
///         blue: Cell::new(15, 15),
///         silver: None,
///     },
///     Target::colored(Symbol::Pyramid, Color::Blue).unwrap(),
/// )
/// .unwrap();
///
/// let config = SolverConfig::new().with_worker_count(1).with_random_seed(7);
/// let result = ricochet_solver::solve(&puzzle, &config, &NullSink).unwrap();
/// assert!(result.is_solved());
/// ```
pub fn solve(
    puzzle: &Puzzle,
    config: &SolverConfig,
    progress: &dyn ProgressSink,
) -> Result<SolveResult> {
    let board = Board::new(&puzzle.tiles)?;
    if puzzle.has_silver() {
        Solver::<P5>::new(board, puzzle, config)?.run(progress)
    } else {
        Solver::<P4>::new(board, puzzle, config)?.run(progress)
    }
}
