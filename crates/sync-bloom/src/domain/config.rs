//! Filter configuration and validation
//!
//! # Example
//!
//! ```
//! use sync_bloom::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_elements(10_000)
//!     .false_positive_rate(0.001)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.expected_elements, 10_000);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Filter sizing configuration
///
/// Validation applies the construction preconditions only. A config that
/// passes `validate` can still be rejected at construction if the derived
/// parameters are unusable (e.g. zero expected elements).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Number of elements the filter is sized for (n)
    pub expected_elements: i64,
    /// Target false positive rate, in [0, 1)
    pub false_positive_rate: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_elements: 1000,
            false_positive_rate: 0.01,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(expected_elements: i64, false_positive_rate: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_elements,
            false_positive_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from JSON, filling unset fields with defaults
    ///
    /// ```
    /// use sync_bloom::FilterConfig;
    ///
    /// let config = FilterConfig::from_json(r#"{ "false_positive_rate": 0.05 }"#).unwrap();
    /// assert_eq!(config.expected_elements, 1000);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| FilterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the construction preconditions
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.expected_elements < 0 {
            return Err(FilterError::InvalidElementCount {
                elements: self.expected_elements,
            });
        }

        if !(0.0..1.0).contains(&self.false_positive_rate) {
            return Err(FilterError::InvalidFalsePositiveRate {
                rate: self.false_positive_rate,
            });
        }

        Ok(())
    }

    /// Builder-style method to set expected elements
    pub fn with_expected_elements(mut self, elements: i64) -> Self {
        self.expected_elements = elements;
        self
    }

    /// Builder-style method to set the target false positive rate
    pub fn with_false_positive_rate(mut self, rate: f64) -> Self {
        self.false_positive_rate = rate;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_elements: Option<i64>,
    false_positive_rate: Option<f64>,
}

impl FilterConfigBuilder {
    /// Create a new builder with all fields unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of elements to size for
    pub fn expected_elements(mut self, elements: i64) -> Self {
        self.expected_elements = Some(elements);
        self
    }

    /// Set the target false positive rate
    pub fn false_positive_rate(mut self, rate: f64) -> Self {
        self.false_positive_rate = Some(rate);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            expected_elements: self.expected_elements.unwrap_or(defaults.expected_elements),
            false_positive_rate: self
                .false_positive_rate
                .unwrap_or(defaults.false_positive_rate),
        };

        config.validate()?;
        Ok(config)
    }
}
