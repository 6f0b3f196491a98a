//! Packed bit array backing a filter
//!
//! Bit `i` lives in byte `i / 8` under mask `1 << (i % 8)` (LSB-first).
//! The store is allocated at `ceil(size / 8) + 1` bytes and never resized;
//! `reset` zeroes it in place. Allocation is fallible so an oversized filter
//! is reported to the caller rather than aborting the process.
//!
//! Callers reduce indices modulo the logical size before calling in.

use std::collections::TryReserveError;

use bitvec::prelude::*;

/// Fixed-size packed bit array
#[derive(Clone, Debug)]
pub struct BitStore {
    bits: BitVec<u8, Lsb0>,
}

impl BitStore {
    /// Allocate a zeroed store for `size` logical bits
    ///
    /// # Errors
    /// Returns the allocator's error if the bytes cannot be reserved.
    pub fn new(size: u64) -> Result<Self, TryReserveError> {
        let byte_len = Self::byte_len_for(size);
        let mut bytes = Vec::<u8>::new();
        bytes.try_reserve_exact(byte_len)?;
        bytes.resize(byte_len, 0);

        Ok(Self {
            bits: BitVec::from_vec(bytes),
        })
    }

    /// Bytes allocated for `size` logical bits, including the slack byte
    pub fn byte_len_for(size: u64) -> usize {
        (size.div_ceil(8) + 1) as usize
    }

    /// Set bit `index`. Idempotent.
    #[inline]
    pub fn set_bit(&mut self, index: u64) {
        self.bits.set(index as usize, true);
    }

    /// Whether bit `index` is set
    #[inline]
    pub fn test_bit(&self, index: u64) -> bool {
        self.bits[index as usize]
    }

    /// Zero every bit, keeping the allocation
    pub fn reset(&mut self) {
        self.bits.fill(false);
    }

    /// Allocated length in bytes
    pub fn byte_len(&self) -> usize {
        self.bits.as_raw_slice().len()
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    #[cfg(test)]
    fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}
