//! Memory-efficient packed representations of robot positions.
//!
//! A packed state is the hash key of the search: one byte per robot, no
//! heap allocation, byte-wise equality. Robots are distinguishable, so
//! swapping two robots yields a different state.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use crate::cell::Cell;

/// A fixed-width byte encoding of all robot positions.
///
/// The all-zero value (`Self::default()`) is the sentinel predecessor of
/// the start state: it would place every robot on cell (0,0), which no
/// reachable state can do, so it never collides with a real key.
///
/// Packed states are deliberately `Copy` value types; at the scale of 10^8
/// states any indirection would dominate the memory and lookup cost.
pub trait Packed:
    Copy + Default + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Number of robots encoded, 4 or 5.
    const ROBOTS: usize;

    /// Packs the given cells, one per robot in packing order.
    ///
    /// # Panics
    ///
    /// Panics if `cells` does not hold exactly [`Packed::ROBOTS`] entries.
    fn from_cells(cells: &[Cell]) -> Self;

    /// Returns the cell of the robot at `robot`.
    fn cell(&self, robot: usize) -> Cell;

    /// Returns a copy with the robot at `robot` moved to `cell`.
    #[must_use]
    fn with_cell(&self, robot: usize, cell: Cell) -> Self;

    /// The raw key bytes.
    fn bytes(&self) -> &[u8];

    /// Seeded 64-bit hash of the key bytes.
    ///
    /// Deterministic for a fixed seed; the seed is randomized per run (or
    /// pinned through configuration) so hash-table layout cannot be chosen
    /// by an adversary, and stays fixed for the lifetime of the map.
    fn hash_seeded(&self, seed: u64) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write_u64(seed);
        hasher.write(self.bytes());
        hasher.finish()
    }

    /// Returns true for the sentinel predecessor of the start state.
    fn is_sentinel(&self) -> bool {
        self.bytes().iter().all(|&b| b == 0)
    }
}

macro_rules! packed_impl {
    ($name:ident, $robots:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub [u8; $robots]);

        impl Packed for $name {
            const ROBOTS: usize = $robots;

            fn from_cells(cells: &[Cell]) -> Self {
                assert_eq!(cells.len(), $robots, "expected {} robot cells", $robots);
                let mut bytes = [0u8; $robots];
                for (b, c) in bytes.iter_mut().zip(cells) {
                    *b = c.byte();
                }
                $name(bytes)
            }

            fn cell(&self, robot: usize) -> Cell {
                Cell::from_byte(self.0[robot])
            }

            fn with_cell(&self, robot: usize, cell: Cell) -> Self {
                let mut copy = *self;
                copy.0[robot] = cell.byte();
                copy
            }

            fn bytes(&self) -> &[u8] {
                &self.0
            }
        }
    };
}

packed_impl!(P4, 4, "Packed state of the four standard robots.");
packed_impl!(P5, 5, "Packed state of the four standard robots plus silver.");
