//! Level-synchronous parallel breadth-first search over packed states.
//!
//! Scheduling model: K reader threads and K writer threads (K = worker
//! count), wired level by level through K bounded channels. Readers drain
//! the source frontier of the shards assigned to their slot and feed the
//! states to their writer; writers prune, expand and insert successors.
//! Two ack rounds form the level barrier:
//!
//! 1. every reader has emitted (or abandoned) its source states,
//! 2. every writer has drained its channel to disconnection.
//!
//! A found solution flips one atomic flag. Readers consult it and stop
//! emitting; writers always drain. Cancelling writers mid-level could
//! leave an optimal goal state without its predecessor in the map and
//! break reconstruction, so only the reader side is cancellable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, SyncSender};
use std::sync::Mutex;
use std::thread;
use std::time::Instant;

use ricochet_board::Board;
use ricochet_config::SolverConfig;
use ricochet_core::cell::NUM_FIELDS;
use ricochet_core::{Cell, Color, Error, Packed, Puzzle, Result};
use tracing::info;

use crate::moves::successors;
use crate::partmap::PartitionedMap;
use crate::progress::ProgressSink;
use crate::solution::{Move, SolveResult};

/// Per-level work order for a reader thread.
///
/// Dropping `data` closes the paired writer's channel; `done` acks the
/// reader half of the level barrier.
struct ReaderTicket<P> {
    data: SyncSender<P>,
    done: Sender<()>,
}

/// Per-level work order for a writer thread.
struct WriterTicket<P> {
    data: Receiver<P>,
    level: usize,
    done: Sender<()>,
}

/// The search engine for one puzzle.
///
/// Generic over the packed-state width: `P4` for the standard four robots,
/// `P5` when silver takes part. Use [`crate::solve`] to dispatch on the
/// puzzle automatically.
pub struct Solver<P: Packed> {
    board: Board,
    target_cell: Cell,
    /// Robot index that must reach the target; `None` for the cosmic
    /// wildcard, where any robot counts.
    target_robot: Option<usize>,
    min_moves: [u8; NUM_FIELDS],
    map: PartitionedMap<P>,
    has_solution: AtomicBool,
    /// Written exactly once by the CAS winner, read after the barrier.
    solution_to: Mutex<Option<P>>,
    workers: usize,
    channel_capacity: usize,
    max_depth: usize,
}

impl<P: Packed> Solver<P> {
    /// Prepares a search: resolves the target, computes the lower-bound
    /// table and stores the start state at level 0.
    ///
    /// The packed width must match the puzzle (`P5` iff silver is set).
    pub fn new(board: Board, puzzle: &Puzzle, config: &SolverConfig) -> Result<Self> {
        let cells = puzzle.robots.cells();
        let start = P::from_cells(&cells);
        let target_cell = board.target_coord(&puzzle.target)?;
        let target_robot = if puzzle.target.is_cosmic() {
            None
        } else {
            puzzle.target.color.map(|color| color.index())
        };
        let min_moves = board.min_moves(target_cell);
        let seed = config.random_seed.unwrap_or_else(rand::random);
        let workers = config
            .search
            .worker_count
            .unwrap_or_else(|| thread::available_parallelism().map_or(1, |n| n.get()));
        assert!(workers > 0, "worker_count must be positive");

        Ok(Solver {
            board,
            target_cell,
            target_robot,
            min_moves,
            map: PartitionedMap::new(start, config.search.shard_count, seed),
            has_solution: AtomicBool::new(false),
            solution_to: Mutex::new(None),
            workers,
            channel_capacity: config.search.channel_capacity,
            max_depth: config.search.max_depth,
        })
    }

    /// Runs the search to completion and reconstructs the solution.
    ///
    /// Returns an empty move list when no solution exists within the depth
    /// bound. `Error::InconsistentState` can only surface on a solver bug.
    pub fn run(&self, progress: &dyn ProgressSink) -> Result<SolveResult> {
        let started = Instant::now();
        info!(
            event = "solve_start",
            robots = P::ROBOTS,
            workers = self.workers,
            max_depth = self.max_depth,
            goal = %self.target_cell,
        );

        thread::scope(|scope| {
            let mut reader_control = Vec::with_capacity(self.workers);
            let mut writer_control = Vec::with_capacity(self.workers);
            for idx in 0..self.workers {
                let (tx, rx) = mpsc::channel();
                reader_control.push(tx);
                scope.spawn(move || self.reader(idx, rx));

                let (tx, rx) = mpsc::channel();
                writer_control.push(tx);
                scope.spawn(move || self.writer(rx));
            }

            let (reader_done, reader_acks) = mpsc::channel();
            let (writer_done, writer_acks) = mpsc::channel();

            for level in 0..self.max_depth {
                progress.on_level(level, self.map.frontier_len());

                for idx in 0..self.workers {
                    let (data_tx, data_rx) = mpsc::sync_channel(self.channel_capacity);
                    writer_control[idx]
                        .send(WriterTicket {
                            data: data_rx,
                            level,
                            done: writer_done.clone(),
                        })
                        .expect("writer thread exited early");
                    reader_control[idx]
                        .send(ReaderTicket {
                            data: data_tx,
                            done: reader_done.clone(),
                        })
                        .expect("reader thread exited early");
                }

                // barrier phase one: all source states are in channels or
                // abandoned to cancellation
                for _ in 0..self.workers {
                    reader_acks.recv().expect("reader ack channel closed");
                }
                // phase two: every channel drained to disconnection
                for _ in 0..self.workers {
                    writer_acks.recv().expect("writer ack channel closed");
                }

                if self.has_solution.load(Ordering::Acquire) {
                    break;
                }
                self.map.rotate();
            }

            drop(reader_control);
            drop(writer_control);
        });

        let moves = self.reconstruct()?;
        let num_calc_move = self.num_calc_move();
        info!(
            event = "solve_end",
            solved = !moves.is_empty(),
            moves = moves.len(),
            num_calc_move,
            duration_ms = started.elapsed().as_millis() as u64,
        );
        progress.on_result(&moves, num_calc_move);
        Ok(SolveResult {
            moves,
            num_calc_move,
        })
    }

    /// Number of states stored so far.
    pub fn num_calc_move(&self) -> usize {
        self.map.len()
    }

    fn reader(&self, idx: usize, control: Receiver<ReaderTicket<P>>) {
        let num_parts = self.map.num_parts();
        for ticket in control {
            'level: for part in (idx..num_parts).step_by(self.workers) {
                let source = self.map.source(part);
                for &state in source.iter() {
                    if self.has_solution.load(Ordering::Acquire) {
                        break 'level;
                    }
                    if ticket.data.send(state).is_err() {
                        break 'level;
                    }
                }
            }
            let ReaderTicket { data, done } = ticket;
            drop(data);
            let _ = done.send(());
        }
    }

    fn writer(&self, control: Receiver<WriterTicket<P>>) {
        for ticket in control {
            let remaining = self.max_depth - ticket.level;
            for from in &ticket.data {
                if !self.expandable(&from, remaining) {
                    continue;
                }
                for (robot, to) in successors(&self.board, &from) {
                    self.store(robot, from, to);
                }
            }
            let _ = ticket.done.send(());
        }
    }

    /// Admissibility pruning: skip states whose remaining-move lower bound
    /// already exceeds the remaining plies.
    fn expandable(&self, state: &P, remaining: usize) -> bool {
        match self.target_robot {
            Some(robot) => usize::from(self.min_moves[state.cell(robot).index()]) <= remaining,
            None => (0..P::ROBOTS)
                .any(|robot| usize::from(self.min_moves[state.cell(robot).index()]) <= remaining),
        }
    }

    /// Inserts a successor and checks the goal on first insertion.
    ///
    /// The predecessor recorded for a contested state is whichever writer
    /// got there first; every candidate predecessor sits one level up, so
    /// the optimum length is unaffected by the race.
    fn store(&self, robot: usize, from: P, to: P) {
        if !self.map.store_if_absent(to, from) {
            return;
        }
        if to.cell(robot) != self.target_cell {
            return;
        }
        if let Some(target_robot) = self.target_robot {
            if robot != target_robot {
                return;
            }
        }
        if self.has_turned(robot, from, to)
            && self
                .has_solution
                .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
                .is_ok()
        {
            *self.solution_to.lock().unwrap() = Some(to);
        }
    }

    /// Checks the 90-degree rule: walking back toward the start, the
    /// target robot's x and y coordinate must each have changed at least
    /// once.
    fn has_turned(&self, robot: usize, from: P, to: P) -> bool {
        let (mut from, mut to) = (from, to);
        let (mut horizontal, mut vertical) = (false, false);
        loop {
            let f = from.cell(robot);
            let t = to.cell(robot);
            horizontal |= f.x() != t.x();
            vertical |= f.y() != t.y();
            if horizontal && vertical {
                return true;
            }

            to = from;
            from = self
                .map
                .load(&to)
                .expect("predecessor chain broken during goal check");
            if from.is_sentinel() {
                return false;
            }
        }
    }

    /// Walks the predecessor map backward from the solution state.
    fn reconstruct(&self) -> Result<Vec<Move>> {
        if !self.has_solution.load(Ordering::Acquire) {
            return Ok(Vec::new());
        }
        let mut to = self
            .solution_to
            .lock()
            .unwrap()
            .expect("solution flag set without a state");

        let mut moves = Vec::new();
        loop {
            let from = self.map.load(&to).ok_or(Error::InconsistentState)?;
            if from.is_sentinel() {
                moves.reverse();
                return Ok(moves);
            }
            let robot = moved_robot(&from, &to)?;
            moves.push(Move {
                color: Color::from_index(robot),
                to: to.cell(robot),
            });
            to = from;
        }
    }
}

/// The unique robot whose cell differs between two adjacent states.
fn moved_robot<P: Packed>(from: &P, to: &P) -> Result<usize> {
    (0..P::ROBOTS)
        .find(|&robot| from.cell(robot) != to.cell(robot))
        .ok_or(Error::InconsistentState)
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
