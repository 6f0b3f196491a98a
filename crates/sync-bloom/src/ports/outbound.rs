//! Outbound Ports (Driven Ports)
//!
//! The filter treats its underlying hash as an opaque collaborator.

/// Keyed 64-bit hash primitive (Driven Port)
///
/// Implementations must be pure: the same `(seed, data)` pair always yields
/// the same value for the life of the program. No cryptographic strength is
/// required, only good dispersion across seeds.
pub trait KeyedHash: Send + Sync {
    /// Hash `data` under `seed`
    fn hash64(&self, seed: u64, data: &[u8]) -> u64;
}
