//! Pseudo-random initial cell state.
//!
//! Cells are filled eight at a time from a chained multiplicative hash: each
//! word takes the low bit of every little-endian byte of the running hash.
//! The same seed always produces the same board.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;
use tracing::debug;

const MIX: u64 = 0x517c_c1b7_2722_0a95;
const LOW_BITS: u64 = 0x0101_0101_0101_0101;

#[inline]
fn mix(h: u64, word: u64) -> u64 {
    (h.rotate_left(5) ^ word).wrapping_mul(MIX)
}

/// Fill `cells` with independent 0/1 values derived from `seed`.
pub fn randomize(cells: &mut [u8], seed: u64) {
    let mut h = seed;
    for (i, chunk) in cells.chunks_mut(8).enumerate() {
        h = mix(h, i as u64);
        let bits = (h & LOW_BITS).to_le_bytes();
        chunk.copy_from_slice(&bits[..chunk.len()]);
    }
    debug!(seed, cells = cells.len(), "randomised cells");
}

/// A seed derived from the wall clock, for runs that do not pin one.
pub fn clock_seed() -> u64 {
    let mut hasher = DefaultHasher::new();
    SystemTime::now().hash(&mut hasher);
    hasher.finish()
}
