//! End-to-end search tests.
//!
//! The fixtures use the standard four-tile starting board; expected move
//! counts were verified by hand against the tile layouts.

use super::*;
use crate::progress::{CountingSink, NullSink};
use crate::run::solve;
use crate::test_utils::{replay, s1_puzzle, s2_puzzle, turned_on_both_axes};
use ricochet_board::Board;
use ricochet_config::SolverConfig;
use ricochet_core::{Cell, Color, Packed, Puzzle, Target, P4, P5};

fn config() -> SolverConfig {
    // a small shard table keeps the tests lean; two workers exercise the
    // level barrier and the insertion races
    SolverConfig::new()
        .with_shard_count(512)
        .with_worker_count(2)
        .with_random_seed(1)
}

fn target_cell(puzzle: &Puzzle) -> Cell {
    Board::new(&puzzle.tiles)
        .unwrap()
        .target_coord(&puzzle.target)
        .unwrap()
}

#[test]
fn solves_blue_pyramid() {
    let puzzle = s1_puzzle();
    let sink = CountingSink::new();
    let result = solve(&puzzle, &config(), &sink).unwrap();

    assert!(result.is_solved());
    // a two-move solution cannot satisfy the has-turned rule from this
    // start, and a five-move solution exists
    assert!(
        (3..=5).contains(&result.moves.len()),
        "got {:?}",
        result.moves
    );
    assert!(result.num_calc_move > 0);

    let board = Board::new(&puzzle.tiles).unwrap();
    let final_cells = replay(&board, &puzzle, &result.moves);
    assert_eq!(final_cells[Color::Blue.index()], target_cell(&puzzle));
    assert_eq!(result.moves.last().unwrap().color, Color::Blue);
    assert!(turned_on_both_axes(&puzzle, &result.moves, Color::Blue));

    assert_eq!(sink.result_count(), 1);
    assert!(sink.level_count() >= result.moves.len());
}

#[test]
fn solves_blue_pyramid_alternate_setup() {
    let puzzle = s2_puzzle();
    let result = solve(&puzzle, &config(), &NullSink).unwrap();

    assert!(result.is_solved());
    // yellow blocks the top row, leaving a three-move staircase
    assert!(
        (2..=3).contains(&result.moves.len()),
        "got {:?}",
        result.moves
    );

    let board = Board::new(&puzzle.tiles).unwrap();
    let final_cells = replay(&board, &puzzle, &result.moves);
    assert_eq!(final_cells[Color::Blue.index()], target_cell(&puzzle));
    assert!(turned_on_both_axes(&puzzle, &result.moves, Color::Blue));
}

#[test]
fn starting_on_the_target_does_not_count() {
    // blue already sits on the blue pyramid but has never turned; it has
    // to leave and come back changing both axes on the way
    let mut puzzle = s1_puzzle();
    puzzle.robots.blue = target_cell(&puzzle);
    let puzzle = Puzzle::new(puzzle.tiles, puzzle.robots, puzzle.target).unwrap();

    let result = solve(&puzzle, &config(), &NullSink).unwrap();

    assert!(result.is_solved());
    // a two-move out-and-back stays on one axis, so three is the floor;
    // a four-move round trip exists
    assert!(
        (3..=4).contains(&result.moves.len()),
        "got {:?}",
        result.moves
    );

    let board = Board::new(&puzzle.tiles).unwrap();
    let final_cells = replay(&board, &puzzle, &result.moves);
    assert_eq!(final_cells[Color::Blue.index()], target_cell(&puzzle));
    assert!(turned_on_both_axes(&puzzle, &result.moves, Color::Blue));
}

#[test]
fn cosmic_target_accepts_any_robot() {
    // green is three slides from the wildcard (east into the pyramid
    // corner, south against red, east into the cosmic corner); the target
    // is not green's, so only the wildcard rule can accept it
    let mut puzzle = s1_puzzle();
    puzzle.robots.red = Cell::new(3, 2);
    puzzle.robots.green = Cell::new(0, 5);
    puzzle.target = Target::cosmic();
    let puzzle = Puzzle::new(puzzle.tiles, puzzle.robots, puzzle.target).unwrap();

    let result = solve(&puzzle, &config(), &NullSink).unwrap();

    assert!(result.is_solved());
    assert!(
        (2..=3).contains(&result.moves.len()),
        "got {:?}",
        result.moves
    );
    let board = Board::new(&puzzle.tiles).unwrap();
    let cosmic = board.target_coord(&Target::cosmic()).unwrap();
    let final_cells = replay(&board, &puzzle, &result.moves);

    let last = result.moves.last().unwrap();
    assert_eq!(last.to, cosmic);
    assert_eq!(final_cells[last.color.index()], cosmic);
    assert!(turned_on_both_axes(&puzzle, &result.moves, last.color));
}

#[test]
fn depth_bound_cuts_the_search_off() {
    // the shortest solution needs three moves; with two plies the search
    // must come up empty but still report its state count
    let puzzle = s1_puzzle();
    let sink = CountingSink::new();
    let result = solve(&puzzle, &config().with_max_depth(2), &sink).unwrap();

    assert!(!result.is_solved());
    assert!(result.moves.is_empty());
    assert!(result.num_calc_move > 0);
    assert_eq!(sink.level_count(), 2);
    assert_eq!(sink.result_count(), 1);
}

#[test]
fn deterministic_with_fixed_seed_and_single_worker() {
    let puzzle = s2_puzzle();
    let config = SolverConfig::new()
        .with_shard_count(512)
        .with_worker_count(1)
        .with_random_seed(7);

    let first = solve(&puzzle, &config, &NullSink).unwrap();
    let second = solve(&puzzle, &config, &NullSink).unwrap();

    assert_eq!(first.moves, second.moves);
    assert_eq!(first.num_calc_move, second.num_calc_move);
}

#[test]
fn silver_widens_the_packed_state() {
    let mut puzzle = s1_puzzle();
    puzzle.robots.silver = Some(Cell::new(7, 3));
    let puzzle = Puzzle::new(puzzle.tiles, puzzle.robots, puzzle.target).unwrap();
    assert_eq!(puzzle.robots.cells().len(), P5::ROBOTS);

    let result = solve(&puzzle, &config(), &NullSink).unwrap();

    assert!(result.is_solved());
    let board = Board::new(&puzzle.tiles).unwrap();
    let final_cells = replay(&board, &puzzle, &result.moves);
    assert_eq!(final_cells.len(), 5);
    assert_eq!(final_cells[Color::Blue.index()], target_cell(&puzzle));
}

#[test]
fn solution_path_is_a_predecessor_chain() {
    // every hop of the reconstruction must differ in exactly one robot;
    // walk the map directly instead of trusting the move list
    let puzzle = s1_puzzle();
    let board = Board::new(&puzzle.tiles).unwrap();
    let solver: Solver<P4> = Solver::new(board, &puzzle, &config()).unwrap();
    let result = solver.run(&NullSink).unwrap();
    assert!(result.is_solved());

    let mut to = solver.solution_to.lock().unwrap().unwrap();
    let mut depth = 0;
    loop {
        let from = solver.map.load(&to).unwrap();
        if from.is_sentinel() {
            break;
        }
        let robot = moved_robot(&from, &to).unwrap();
        for r in 0..P4::ROBOTS {
            if r != robot {
                assert_eq!(from.cell(r), to.cell(r));
            }
        }
        depth += 1;
        to = from;
    }
    assert_eq!(depth, result.moves.len());
}

#[test]
fn pruning_respects_the_lower_bound() {
    let puzzle = s1_puzzle();
    let board = Board::new(&puzzle.tiles).unwrap();
    let solver: Solver<P4> = Solver::new(board, &puzzle, &config()).unwrap();
    let start = P4::from_cells(&puzzle.robots.cells());

    // blue shares neither row nor column with the pyramid, so its lower
    // bound is at least two
    let blue_bound = usize::from(solver.min_moves[start.cell(Color::Blue.index()).index()]);
    assert!(blue_bound >= 2);
    assert!(solver.expandable(&start, blue_bound));
    assert!(!solver.expandable(&start, blue_bound - 1));
}

#[test]
fn cosmic_pruning_takes_the_best_robot() {
    let mut puzzle = s1_puzzle();
    puzzle.target = Target::cosmic();
    let board = Board::new(&puzzle.tiles).unwrap();
    let solver: Solver<P4> = Solver::new(board, &puzzle, &config()).unwrap();
    let start = P4::from_cells(&puzzle.robots.cells());

    let best = (0..P4::ROBOTS)
        .map(|r| usize::from(solver.min_moves[start.cell(r).index()]))
        .min()
        .unwrap();
    assert!(best >= 1);
    assert!(solver.expandable(&start, best));
    assert!(!solver.expandable(&start, best - 1));
}
