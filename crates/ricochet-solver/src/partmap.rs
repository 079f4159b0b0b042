//! Partitioned concurrent predecessor map.
//!
//! The map records, for every state reached so far, the state it was
//! expanded from. It is partitioned into many small shards so that
//! concurrent writers rarely contend on the same lock, and it carries the
//! BFS frontier alongside the entries: each part keeps a *source* list
//! (states to expand this level) and a *target* list (states first
//! inserted this level). At the level barrier [`PartitionedMap::rotate`]
//! promotes target to source.
//!
//! Entries are never overwritten or removed; the first writer to insert a
//! state wins and its predecessor stays.

use std::mem;
use std::sync::{Mutex, RwLock, RwLockReadGuard};

use ricochet_core::Packed;
use rustc_hash::FxHashMap;

struct PartState<P> {
    map: FxHashMap<P, P>,
    target: Vec<P>,
}

struct Part<P> {
    // map and target move together: a reader must never observe a state
    // in the table whose frontier entry was written by a different
    // predecessor
    state: Mutex<PartState<P>>,
    // separate lock so readers can hold it across channel sends without
    // ordering against writers inserting into the same part; only
    // rotate() takes it for writing, and only at the level barrier
    source: RwLock<Vec<P>>,
}

/// Sharded `state -> predecessor` map plus per-shard frontier lists.
pub struct PartitionedMap<P> {
    seed: u64,
    parts: Vec<Part<P>>,
}

impl<P: Packed> PartitionedMap<P> {
    /// Creates the map with `num_parts` shards, seeds the hash layout and
    /// stores `start` with the sentinel predecessor on the level-0 source
    /// frontier.
    pub fn new(start: P, num_parts: usize, seed: u64) -> Self {
        assert!(num_parts > 0, "need at least one part");
        let mut parts = Vec::with_capacity(num_parts);
        for _ in 0..num_parts {
            parts.push(Part {
                state: Mutex::new(PartState {
                    map: FxHashMap::default(),
                    target: Vec::new(),
                }),
                source: RwLock::new(Vec::new()),
            });
        }

        let pm = PartitionedMap { seed, parts };
        {
            let part = pm.part_of(&start);
            let mut state = part.state.lock().unwrap();
            state.map.insert(start, P::default());
            drop(state);
            part.source.write().unwrap().push(start);
        }
        pm
    }

    fn part_of(&self, key: &P) -> &Part<P> {
        let idx = key.hash_seeded(self.seed) % self.parts.len() as u64;
        &self.parts[idx as usize]
    }

    /// Looks up the predecessor of `key`. Never mutates.
    pub fn load(&self, key: &P) -> Option<P> {
        self.part_of(key).state.lock().unwrap().map.get(key).copied()
    }

    /// Inserts `key -> pred` if `key` is absent and appends `key` to the
    /// part's target frontier. Returns true for the first writer only;
    /// later attempts for the same key are dropped.
    pub fn store_if_absent(&self, key: P, pred: P) -> bool {
        let mut state = self.part_of(&key).state.lock().unwrap();
        if state.map.contains_key(&key) {
            return false;
        }
        state.map.insert(key, pred);
        state.target.push(key);
        true
    }

    /// Total number of states stored.
    pub fn len(&self) -> usize {
        self.parts
            .iter()
            .map(|p| p.state.lock().unwrap().map.len())
            .sum()
    }

    /// Returns true if no states are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of shards.
    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    /// Read access to one shard's source frontier.
    pub fn source(&self, idx: usize) -> RwLockReadGuard<'_, Vec<P>> {
        self.parts[idx].source.read().unwrap()
    }

    /// Total number of states on the source frontier.
    pub fn frontier_len(&self) -> usize {
        self.parts
            .iter()
            .map(|p| p.source.read().unwrap().len())
            .sum()
    }

    /// Promotes every part's target frontier to its source frontier,
    /// dropping the old sources.
    ///
    /// Callers must have quiesced all workers at the level barrier;
    /// nothing else synchronizes rotation against in-flight reads.
    pub fn rotate(&self) {
        for part in &self.parts {
            let target = mem::take(&mut part.state.lock().unwrap().target);
            *part.source.write().unwrap() = target;
        }
    }
}

#[cfg(test)]
#[path = "partmap_tests.rs"]
mod tests;
