//! Hash generation for the filter
//!
//! Two base hashes are computed per element with distinct fixed seeds, then
//! combined by double hashing: h(i) = h1 + i * h2 (mod 2^64). This gives k
//! indices for the cost of two hash calls.

use crate::ports::KeyedHash;

/// Seed for the first base hash
pub const SEED_H1: u64 = 0x5bd1_e995_0000_0001;

/// Seed for the second base hash
pub const SEED_H2: u64 = 0xc6a4_a793_5bd1_e995;

/// The two base hashes of one element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashPair {
    pub h1: u64,
    pub h2: u64,
}

impl HashPair {
    /// Derived hash for round `i`
    ///
    /// Overflow wraps; this is modular arithmetic, not an error.
    #[inline]
    pub fn round(&self, i: u64) -> u64 {
        self.h1.wrapping_add(i.wrapping_mul(self.h2))
    }

    /// Bit indices for rounds `0..rounds`, reduced modulo `size`
    ///
    /// `size` must be non-zero; every constructed filter guarantees it.
    pub(crate) fn indices(&self, rounds: u64, size: u64) -> impl Iterator<Item = u64> + '_ {
        (0..rounds).map(move |i| self.round(i) % size)
    }
}

/// Compute the base hash pair for `data`
pub fn generate_multi_hash<H: KeyedHash + ?Sized>(hasher: &H, data: &[u8]) -> HashPair {
    HashPair {
        h1: hasher.hash64(SEED_H1, data),
        h2: hasher.hash64(SEED_H2, data),
    }
}
