//! Short-period cycle detection over recent generations.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Number of recent grid hashes remembered.
pub const HISTORY_LEN: usize = 10;

/// Ring buffer of recent grid hashes.
///
/// Catches still lifes and oscillators with period up to [`HISTORY_LEN`].
#[derive(Debug, Clone, Default)]
pub struct CycleHistory {
    hashes: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `cells`, returning true if the same state was seen recently.
    /// A repeated state is not recorded again.
    pub fn observe(&mut self, cells: &[u8]) -> bool {
        let hash = hash_cells(cells);
        let filled = self.count.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn clear(&mut self) {
        self.hashes = [0; HISTORY_LEN];
        self.count = 0;
    }
}

fn hash_cells(cells: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    cells.hash(&mut hasher);
    hasher.finish()
}
