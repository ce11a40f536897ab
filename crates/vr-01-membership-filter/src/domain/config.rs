//! Membership filter configuration and validation
//!
//! # Example
//!
//! ```
//! use vr_01_membership_filter::FilterConfigBuilder;
//!
//! let config = FilterConfigBuilder::new()
//!     .size_bits(20_000)
//!     .hash_count(2)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.hash_count, 2);
//! ```

use serde::{Deserialize, Serialize};

use super::hash_functions::MAX_HASH_FUNCTIONS;
use crate::error::FilterError;

/// Membership filter configuration
///
/// - `size_bits` must be at least 1
/// - `hash_count` must be between 1 and [`MAX_HASH_FUNCTIONS`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Size of the bit array in bits (m)
    pub size_bits: usize,
    /// Number of hash functions applied per key (k)
    pub hash_count: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            size_bits: 10_000,
            hash_count: 3,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(size_bits: usize, hash_count: usize) -> Result<Self, FilterError> {
        let config = Self {
            size_bits,
            hash_count,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.size_bits == 0 {
            return Err(FilterError::InvalidSize);
        }

        if self.hash_count == 0 || self.hash_count > MAX_HASH_FUNCTIONS {
            return Err(FilterError::InvalidHashCount {
                count: self.hash_count,
                max: MAX_HASH_FUNCTIONS,
            });
        }

        Ok(())
    }

    /// Builder-style method to set the size in bits
    pub fn with_size_bits(mut self, size_bits: usize) -> Self {
        self.size_bits = size_bits;
        self
    }

    /// Builder-style method to set the hash count
    pub fn with_hash_count(mut self, hash_count: usize) -> Self {
        self.hash_count = hash_count;
        self
    }

    /// Bytes needed to hold `size_bits` bits.
    pub fn storage_bytes(&self) -> usize {
        self.size_bits.div_ceil(8)
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    size_bits: Option<usize>,
    hash_count: Option<usize>,
}

impl FilterConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set filter size in bits
    pub fn size_bits(mut self, bits: usize) -> Self {
        self.size_bits = Some(bits);
        self
    }

    /// Set number of hash functions (1 to 3)
    pub fn hash_count(mut self, count: usize) -> Self {
        self.hash_count = Some(count);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            size_bits: self.size_bits.unwrap_or(defaults.size_bits),
            hash_count: self.hash_count.unwrap_or(defaults.hash_count),
        };

        config.validate()?;
        Ok(config)
    }
}
