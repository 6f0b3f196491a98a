//! MurmurHash3 adapter
//!
//! Fast, high-quality non-cryptographic hashing. The 64-bit seed is folded
//! into the 32-bit seed the x64/128 variant accepts.

use std::io::Cursor;

use crate::ports::KeyedHash;

/// [`KeyedHash`] backed by `murmur3_x64_128`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3Hash;

impl KeyedHash for Murmur3Hash {
    fn hash64(&self, seed: u64, data: &[u8]) -> u64 {
        let folded_seed = (seed ^ (seed >> 32)) as u32;
        let mut cursor = Cursor::new(data);

        // Reading from an in-memory cursor cannot fail
        let hash = murmur3::murmur3_x64_128(&mut cursor, folded_seed).unwrap_or(0);
        hash as u64
    }
}
