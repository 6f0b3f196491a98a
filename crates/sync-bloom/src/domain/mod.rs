//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Hash generation (double hashing over a keyed hash)
//! - Parameter calculation
//! - The packed bit store
//! - The locked filter controller
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod bit_store;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bit_store::BitStore;
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::{generate_multi_hash, HashPair};
pub use parameters::{calculate_fpr, calculate_parameters, FilterParams};
