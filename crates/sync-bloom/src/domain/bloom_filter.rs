//! Thread-safe Bloom filter
//!
//! INVARIANTS:
//! - size > 0 and hash_rounds > 0 for every constructed filter
//! - No false negatives: once `add(d)` returns, `test(d)` is true until `reset`
//! - The bit array length never changes
//!
//! Locking: `add` and `reset` hold the write lock, `test` holds the read lock.
//! Hashing happens before the lock is taken. `size` and `hash_rounds` are
//! immutable and read without locking.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, warn};

use super::bit_store::BitStore;
use super::config::FilterConfig;
use super::hash_functions::generate_multi_hash;
use super::parameters::{calculate_parameters, FilterParams};
use crate::adapters::Murmur3Hash;
use crate::error::FilterError;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{KeyedHash, MembershipFilter};

/// Bloom filter for probabilistic membership testing
///
/// False positives are possible at roughly the configured rate; false
/// negatives are not. Share it across threads with an `Arc`.
pub struct BloomFilter<H: KeyedHash = Murmur3Hash> {
    params: FilterParams,
    bits: RwLock<BitStore>,
    hasher: H,
    metrics: Arc<dyn MetricsRecorder>,
}

impl BloomFilter<Murmur3Hash> {
    /// Size a filter for `elements` items at `false_positive_rate`
    ///
    /// # Errors
    /// See [`calculate_parameters`]. A size that passes those checks but
    /// cannot be allocated also fails with `InvalidDerivedParameters`.
    /// No filter is returned on error.
    pub fn init(elements: i64, false_positive_rate: f64) -> Result<Self, FilterError> {
        Self::with_hasher(elements, false_positive_rate, Murmur3Hash)
    }

    /// Create a filter from a configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::init(config.expected_elements, config.false_positive_rate)
    }
}

impl<H: KeyedHash> BloomFilter<H> {
    /// Size a filter that derives its indices from `hasher`
    pub fn with_hasher(
        elements: i64,
        false_positive_rate: f64,
        hasher: H,
    ) -> Result<Self, FilterError> {
        let params = match calculate_parameters(elements, false_positive_rate) {
            Ok(params) => params,
            Err(err) => {
                warn!(elements, false_positive_rate, error = %err, "Rejected filter parameters");
                return Err(err);
            }
        };

        let bits = match BitStore::new(params.size) {
            Ok(bits) => bits,
            Err(alloc_err) => {
                warn!(
                    elements,
                    false_positive_rate,
                    size = params.size,
                    error = %alloc_err,
                    "Bit array allocation failed"
                );
                return Err(FilterError::InvalidDerivedParameters {
                    elements,
                    rate: false_positive_rate,
                    size: params.size as f64,
                    hash_rounds: params.hash_rounds as f64,
                });
            }
        };

        debug!(
            size = params.size,
            hash_rounds = params.hash_rounds,
            expected_fpr = params.expected_fpr,
            "Created bloom filter"
        );

        Ok(Self {
            params,
            bits: RwLock::new(bits),
            hasher,
            metrics: Arc::new(NoOpMetrics),
        })
    }

    /// Attach a metrics recorder
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Insert `data`
    pub fn add(&self, data: &[u8]) {
        let start = Instant::now();
        let hashes = generate_multi_hash(&self.hasher, data);

        {
            let mut bits = self.bits.write();
            for index in hashes.indices(self.params.hash_rounds, self.params.size) {
                bits.set_bit(index);
            }
        }

        self.metrics.record_add(start.elapsed());
    }

    /// Test if `data` might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be present (could be a false positive)
    /// - `false` if the element is definitely absent (never a false negative)
    pub fn test(&self, data: &[u8]) -> bool {
        let start = Instant::now();
        let hashes = generate_multi_hash(&self.hasher, data);

        let found = {
            let bits = self.bits.read();
            hashes
                .indices(self.params.hash_rounds, self.params.size)
                .all(|index| bits.test_bit(index))
        };

        self.metrics.record_test(start.elapsed(), found);
        found
    }

    /// Clear every bit, keeping the allocation size
    pub fn reset(&self) {
        self.bits.write().reset();
        self.metrics.record_reset();
        debug!(size = self.params.size, "Reset bloom filter");
    }

    /// Bit indices `data` maps to, one per round, in round order
    pub fn indices(&self, data: &[u8]) -> Vec<u64> {
        generate_multi_hash(&self.hasher, data)
            .indices(self.params.hash_rounds, self.params.size)
            .collect()
    }

    /// Number of addressable bits
    pub fn size(&self) -> u64 {
        self.params.size
    }

    /// Number of indices derived per element
    pub fn hash_rounds(&self) -> u64 {
        self.params.hash_rounds
    }

    /// Parameters derived at construction
    pub fn params(&self) -> FilterParams {
        self.params
    }

    /// Allocated length of the bit array in bytes
    pub fn byte_len(&self) -> usize {
        self.bits.read().byte_len()
    }

    /// Number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.read().count_ones()
    }
}

impl<H: KeyedHash> MembershipFilter for BloomFilter<H> {
    fn add(&self, data: &[u8]) {
        BloomFilter::add(self, data);
    }

    fn test(&self, data: &[u8]) -> bool {
        BloomFilter::test(self, data)
    }

    fn reset(&self) {
        BloomFilter::reset(self);
    }
}

impl<H: KeyedHash> fmt::Debug for BloomFilter<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("size", &self.params.size)
            .field("hash_rounds", &self.params.hash_rounds)
            .field("bits_set", &self.bits_set())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SipHash;
    use crate::metrics::Metrics;

    #[test]
    fn test_init_derives_parameters() {
        let filter = BloomFilter::init(1000, 0.01).unwrap();

        assert_eq!(filter.size(), 9586);
        assert_eq!(filter.hash_rounds(), 7);
        assert_eq!(filter.byte_len(), 1200, "ceil(9586/8) + 1 bytes");
        assert_eq!(filter.bits_set(), 0, "All bits should be zero initially");
    }

    #[test]
    fn test_init_rejects_invalid_inputs() {
        assert!(matches!(
            BloomFilter::init(-1, 0.01),
            Err(FilterError::InvalidElementCount { .. })
        ));
        assert!(matches!(
            BloomFilter::init(100, 1.0),
            Err(FilterError::InvalidFalsePositiveRate { .. })
        ));
        assert!(matches!(
            BloomFilter::init(100, -0.1),
            Err(FilterError::InvalidFalsePositiveRate { .. })
        ));
        assert!(matches!(
            BloomFilter::init(0, 0.01),
            Err(FilterError::InvalidDerivedParameters { .. })
        ));
    }

    #[test]
    fn test_init_rejects_unaddressable_size() {
        // m is about 8.8e19 bits, past what a bit vector can index
        assert!(matches!(
            BloomFilter::init(i64::MAX, 0.01),
            Err(FilterError::InvalidDerivedParameters { elements: i64::MAX, .. })
        ));
    }

    #[test]
    fn test_init_reports_unallocatable_size_as_error() {
        // m is about 1.08e16 bits (1.35 PB): addressable, but no allocator can serve it
        let result = BloomFilter::init(1 << 50, 0.01);

        assert!(
            matches!(
                result,
                Err(FilterError::InvalidDerivedParameters { elements, .. }) if elements == 1 << 50
            ),
            "An unallocatable filter must be rejected with an error"
        );
    }

    #[test]
    fn test_contains_after_add() {
        let filter = BloomFilter::init(100, 0.01).unwrap();
        let element = b"0xABCD1234567890ABCDEF";

        filter.add(element);

        assert!(
            filter.test(element),
            "test() must return true for an added element"
        );
    }

    #[test]
    fn test_add_sets_at_most_k_bits() {
        let filter = BloomFilter::init(100, 0.01).unwrap();

        filter.add(b"test_element");

        assert!(filter.bits_set() > 0, "After add, some bits should be set");
        assert!(filter.bits_set() <= 7, "At most k=7 bits for one element");

        let before = filter.bits_set();
        filter.add(b"test_element");
        assert_eq!(filter.bits_set(), before, "Re-adding must not change the bits");
    }

    #[test]
    fn test_no_false_negatives_bulk() {
        let filter = BloomFilter::init(1000, 0.01).unwrap();
        let elements: Vec<String> = (0..1000).map(|i| format!("address_{:04x}", i)).collect();

        for elem in &elements {
            filter.add(elem.as_bytes());
        }

        for elem in &elements {
            assert!(filter.test(elem.as_bytes()), "False negative for {}", elem);
        }
    }

    #[test]
    fn test_empty_filter_reports_absent() {
        let filter = BloomFilter::init(100, 0.01).unwrap();

        for i in 0..1000 {
            assert!(!filter.test(format!("probe_{}", i).as_bytes()));
        }
        assert!(!filter.test(b""));
    }

    #[test]
    fn test_empty_input_is_valid() {
        let filter = BloomFilter::init(10, 0.1).unwrap();

        filter.add(b"");
        assert!(filter.test(b""));
    }

    #[test]
    fn test_reset_clears_state() {
        let filter = BloomFilter::init(100, 0.01).unwrap();
        let len = filter.byte_len();
        for i in 0..50 {
            filter.add(format!("item_{}", i).as_bytes());
        }

        filter.reset();

        assert_eq!(filter.bits_set(), 0);
        assert_eq!(filter.byte_len(), len, "Reset must keep the allocation size");
        for i in 0..50 {
            assert!(!filter.test(format!("item_{}", i).as_bytes()));
        }

        filter.add(b"item_0");
        assert!(filter.test(b"item_0"), "Filter must be usable after reset");
    }

    #[test]
    fn test_indices_deterministic() {
        let filter = BloomFilter::init(1000, 0.01).unwrap();

        let first = filter.indices(b"stable");
        let second = filter.indices(b"stable");

        assert_eq!(first, second);
        assert_eq!(first.len() as u64, filter.hash_rounds());
        assert!(first.iter().all(|i| *i < filter.size()));
    }

    #[test]
    fn test_add_sets_exactly_the_indexed_bits() {
        let filter = BloomFilter::init(1000, 0.01).unwrap();
        let indices = filter.indices(b"probe");
        let unique: std::collections::HashSet<_> = indices.iter().collect();

        filter.add(b"probe");

        assert_eq!(filter.bits_set(), unique.len());
    }

    #[test]
    fn test_siphash_backed_filter() {
        let filter = BloomFilter::with_hasher(500, 0.01, SipHash).unwrap();

        filter.add(b"alpha");
        assert!(filter.test(b"alpha"));
        assert_eq!(filter.size(), BloomFilter::init(500, 0.01).unwrap().size());
    }

    #[test]
    fn test_from_config() {
        let config = FilterConfig::new(200, 0.05).unwrap();
        let filter = BloomFilter::from_config(&config).unwrap();

        assert_eq!(filter.params(), calculate_parameters(200, 0.05).unwrap());
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = FilterConfig {
            expected_elements: -7,
            false_positive_rate: 0.01,
        };
        assert!(matches!(
            BloomFilter::from_config(&config),
            Err(FilterError::InvalidElementCount { elements: -7 })
        ));

        let config = FilterConfig {
            expected_elements: 100,
            false_positive_rate: 1.0,
        };
        assert!(matches!(
            BloomFilter::from_config(&config),
            Err(FilterError::InvalidFalsePositiveRate { .. })
        ));
    }

    #[test]
    fn test_metrics_recorded() {
        let metrics = Arc::new(Metrics::new());
        let filter = BloomFilter::init(100, 0.01)
            .unwrap()
            .with_metrics(metrics.clone());

        filter.add(b"a");
        filter.add(b"b");
        assert!(filter.test(b"a"));
        filter.reset();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.elements_added, 2);
        assert_eq!(snapshot.tests_performed, 1);
        assert_eq!(snapshot.tests_positive, 1);
        assert_eq!(snapshot.resets, 1);
    }

    #[test]
    fn test_usable_through_membership_port() {
        let filter: Box<dyn MembershipFilter> = Box::new(BloomFilter::init(100, 0.01).unwrap());

        filter.add(b"via_port");
        assert!(filter.test(b"via_port"));
        filter.reset();
        assert!(!filter.test(b"via_port"));
    }
}
