//! Filter sizing from a target false positive rate
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- bits
//! - k = (m/n) * ln(2)         -- hash rounds
//!
//! Both are rounded up. k is derived from the unrounded m.

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Largest bit count whose byte array, slack byte included, a bit vector can address
pub const MAX_SIZE_BITS: u64 = (usize::MAX >> 3) as u64 - 16;

/// Derived filter parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of addressable bits (m)
    pub size: u64,
    /// Number of derived hashes per element (k)
    pub hash_rounds: u64,
    /// False positive rate once `elements` items are inserted
    pub expected_fpr: f64,
}

/// Validate inputs and derive `(size, hash_rounds)` for a filter
///
/// # Errors
/// - `InvalidElementCount` if `elements < 0`
/// - `InvalidFalsePositiveRate` if `rate` is outside `[0, 1)` or NaN
/// - `InvalidDerivedParameters` if the formulas yield a non-positive,
///   non-finite or unaddressable size or round count (e.g. `elements == 0`,
///   or `rate == 0`)
pub fn calculate_parameters(elements: i64, rate: f64) -> Result<FilterParams, FilterError> {
    if elements < 0 {
        return Err(FilterError::InvalidElementCount { elements });
    }
    if !(0.0..1.0).contains(&rate) {
        return Err(FilterError::InvalidFalsePositiveRate { rate });
    }

    let n = elements as f64;
    let m = -n * rate.ln() / (LN_2 * LN_2);
    let k = (m / n) * LN_2;

    let usable = m.is_finite() && k.is_finite() && m > 0.0 && k > 0.0;
    if !usable || m.ceil() > MAX_SIZE_BITS as f64 {
        return Err(FilterError::InvalidDerivedParameters {
            elements,
            rate,
            size: m,
            hash_rounds: k,
        });
    }

    let size = m.ceil() as u64;
    let hash_rounds = k.ceil() as u64;

    Ok(FilterParams {
        size,
        hash_rounds,
        expected_fpr: calculate_fpr(size, elements as u64, hash_rounds),
    })
}

/// False positive rate after inserting `n` elements
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(size: u64, n: u64, hash_rounds: u64) -> f64 {
    if size == 0 {
        return 1.0;
    }
    let exponent = -(hash_rounds as f64) * (n as f64) / (size as f64);
    (1.0 - exponent.exp()).powf(hash_rounds as f64)
}
