//! Adapters Layer (Driven Adapters)
//!
//! Implementations of [`KeyedHash`](crate::ports::KeyedHash) backed by
//! external hash crates.
//!
//! ## Adapters
//!
//! - `Murmur3Hash` - MurmurHash3 x64/128, lower 64 bits (default)
//! - `SipHash` - SipHash-1-3 keyed by the seed

pub mod murmur;
pub mod sip;

pub use murmur::Murmur3Hash;
pub use sip::SipHash;
