//! # sync-bloom
//!
//! A thread-safe, insert-only Bloom filter sized from a target false
//! positive rate.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BloomFilter`: Filter controller (sizing, add/test/reset, locking)
//!   - `BitStore`: Packed bit array
//!   - `HashPair`: Double hashing, h(i) = h1 + i * h2
//!   - `FilterConfig` / `FilterConfigBuilder`: Configuration with validation
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipFilter`: Driving port (add/test/reset)
//!   - `KeyedHash`: Driven port (the underlying 64-bit keyed hash)
//!
//! - **Adapters Layer** (`adapters/`): `KeyedHash` implementations
//!   - `Murmur3Hash` (default), `SipHash`
//!
//! ## Invariants
//!
//! - No false negatives: once `add(d)` returns, `test(d)` is true until `reset`
//! - Sizing: m = ceil(-n*ln(p) / ln(2)^2), k = ceil((m/n) * ln(2))
//!
//! ## Concurrency
//!
//! One reader-writer lock per filter. `add` and `reset` take it exclusively,
//! `test` shares it. An `add` that returns before a `test` starts is always
//! visible to that `test`.
//!
//! ## Usage Example
//!
//! ```
//! use sync_bloom::BloomFilter;
//!
//! let filter = BloomFilter::init(1000, 0.01)?;
//! filter.add(b"user:42");
//!
//! assert!(filter.test(b"user:42"));
//! filter.reset();
//! assert!(!filter.test(b"user:42"));
//! # Ok::<(), sync_bloom::FilterError>(())
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;

// Re-exports for convenience
pub use adapters::{Murmur3Hash, SipHash};
pub use domain::{
    calculate_parameters, BitStore, BloomFilter, FilterConfig, FilterConfigBuilder, FilterParams,
    HashPair,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{KeyedHash, MembershipFilter};
