//! SipHash adapter

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

use crate::ports::KeyedHash;

/// Second key word, mixed with the seed so both SipHash keys vary
const KEY_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// [`KeyedHash`] backed by SipHash-1-3
///
/// Slower than [`Murmur3Hash`](super::Murmur3Hash) but resistant to
/// adversarially chosen inputs when callers pick their own seeds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SipHash;

impl KeyedHash for SipHash {
    fn hash64(&self, seed: u64, data: &[u8]) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(seed, seed.rotate_left(32) ^ KEY_MIX);
        hasher.write(data);
        hasher.finish()
    }
}
