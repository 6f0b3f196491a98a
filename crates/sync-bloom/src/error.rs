//! Error types for filter construction

use thiserror::Error;

/// Errors that can occur while constructing a [`BloomFilter`](crate::BloomFilter)
///
/// Once a filter exists, `add`, `test` and `reset` cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Invalid element count: {elements} (must be zero or greater)")]
    InvalidElementCount { elements: i64 },

    #[error("Invalid false positive rate: {rate} (must be in [0, 1))")]
    InvalidFalsePositiveRate { rate: f64 },

    #[error("Invalid derived parameters: size={size}, hash_rounds={hash_rounds} for {elements} elements at rate {rate}")]
    InvalidDerivedParameters {
        elements: i64,
        rate: f64,
        size: f64,
        hash_rounds: f64,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
