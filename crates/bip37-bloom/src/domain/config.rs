//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bip37_bloom::{BloomConfigBuilder, BloomFilter, BloomFlags};
//!
//! let config = BloomConfigBuilder::new()
//!     .target_fpr(0.0005)
//!     .expected_elements(20)
//!     .tweak(0xdead_beef)
//!     .flags(BloomFlags::All)
//!     .build()
//!     .expect("Valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("Valid config");
//! assert!(filter.is_within_size_constraints());
//! ```

use serde::{Deserialize, Serialize};

use super::flags::BloomFlags;
use crate::error::FilterError;

/// Parameters for a sized BIP37 filter
///
/// Unlike [`BloomFilter::new`](super::BloomFilter::new), which clamps
/// whatever it is given, a config is checked up front:
/// - FPR must be strictly between 0 and 1
/// - at least one expected element
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloomConfig {
    /// Target false positive rate
    pub target_fpr: f64,
    /// Number of elements the filter is sized for
    pub expected_elements: usize,
    /// Hash salt; pick a fresh random value per peer session
    pub tweak: u32,
    /// How the peer should extend the filter on a match
    pub flags: BloomFlags,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            target_fpr: 0.0001, // 0.01% false positive rate
            expected_elements: 50,
            tweak: 0,
            flags: BloomFlags::None,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(
        target_fpr: f64,
        expected_elements: usize,
        tweak: u32,
        flags: BloomFlags,
    ) -> Result<Self, FilterError> {
        let config = Self {
            target_fpr,
            expected_elements,
            tweak,
            flags,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        // Also rejects NaN
        if !(self.target_fpr > 0.0 && self.target_fpr < 1.0) {
            return Err(FilterError::InvalidFPR {
                fpr: self.target_fpr,
            });
        }

        if self.expected_elements == 0 {
            return Err(FilterError::InvalidParameters(
                "expected_elements cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Builder-style method to set target FPR
    pub fn with_target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = fpr;
        self
    }

    /// Builder-style method to set expected elements
    pub fn with_expected_elements(mut self, elements: usize) -> Self {
        self.expected_elements = elements;
        self
    }

    /// Builder-style method to set the tweak
    pub fn with_tweak(mut self, tweak: u32) -> Self {
        self.tweak = tweak;
        self
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    target_fpr: Option<f64>,
    expected_elements: Option<usize>,
    tweak: Option<u32>,
    flags: Option<BloomFlags>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target false positive rate (strictly between 0 and 1)
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Set the number of elements the filter is sized for
    pub fn expected_elements(mut self, elements: usize) -> Self {
        self.expected_elements = Some(elements);
        self
    }

    pub fn tweak(mut self, tweak: u32) -> Self {
        self.tweak = Some(tweak);
        self
    }

    pub fn flags(mut self, flags: BloomFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> BloomConfig {
        let defaults = BloomConfig::default();

        BloomConfig {
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
            expected_elements: self.expected_elements.unwrap_or(defaults.expected_elements),
            tweak: self.tweak.unwrap_or(defaults.tweak),
            flags: self.flags.unwrap_or(defaults.flags),
        }
    }
}
