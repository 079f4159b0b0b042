//! Progress listeners for solver monitoring.
//!
//! The solver notifies a [`ProgressSink`] at the start of every BFS level
//! and exactly once with the final result. Listeners must be cheap: the
//! level callback runs on the scheduler thread between barriers.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::solution::Move;

/// Listener for search progress.
pub trait ProgressSink: Send + Sync {
    /// Called at the start of each BFS level with the number of frontier
    /// states about to be expanded.
    fn on_level(&self, _level: usize, _frontier: usize) {}

    /// Called exactly once after the search ends.
    ///
    /// `moves` is empty when no solution exists within the depth bound;
    /// `num_calc_move` is the total number of states stored.
    fn on_result(&self, _moves: &[Move], _num_calc_move: usize) {}
}

/// A sink that ignores all notifications.
#[derive(Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {}

/// A sink that forwards notifications as structured `tracing` events.
#[derive(Debug, Default)]
pub struct LoggingSink;

impl ProgressSink for LoggingSink {
    fn on_level(&self, level: usize, frontier: usize) {
        tracing::info!(event = "level", level, frontier);
    }

    fn on_result(&self, moves: &[Move], num_calc_move: usize) {
        tracing::info!(
            event = "result",
            solved = !moves.is_empty(),
            moves = moves.len(),
            num_calc_move,
        );
    }
}

/// A sink that counts notifications, for tests.
#[derive(Debug, Default)]
pub struct CountingSink {
    levels: AtomicUsize,
    results: AtomicUsize,
}

impl CountingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `on_level` notifications received.
    pub fn level_count(&self) -> usize {
        self.levels.load(Ordering::SeqCst)
    }

    /// Number of `on_result` notifications received.
    pub fn result_count(&self) -> usize {
        self.results.load(Ordering::SeqCst)
    }
}

impl ProgressSink for CountingSink {
    fn on_level(&self, _level: usize, _frontier: usize) {
        self.levels.fetch_add(1, Ordering::SeqCst);
    }

    fn on_result(&self, _moves: &[Move], _num_calc_move: usize) {
        self.results.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ricochet_core::{Cell, Color};

    #[test]
    fn counting_sink_counts() {
        let sink = CountingSink::new();
        sink.on_level(0, 1);
        sink.on_level(1, 12);
        sink.on_result(
            &[Move {
                color: Color::Blue,
                to: Cell::new(1, 1),
            }],
            42,
        );
        assert_eq!(sink.level_count(), 2);
        assert_eq!(sink.result_count(), 1);
    }
}
