//! Ordered index configuration

use serde::{Deserialize, Serialize};

use crate::error::IndexError;

/// Highest accepted `max_level`; a fair coin reaches it with probability 2^-64
pub const MAX_LEVEL_CEILING: usize = 64;

/// Ordered index configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Ceiling on a node's randomized level
    pub max_level: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { max_level: 5 }
    }
}

impl IndexConfig {
    pub fn new(max_level: usize) -> Result<Self, IndexError> {
        let config = Self { max_level };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), IndexError> {
        if self.max_level == 0 || self.max_level > MAX_LEVEL_CEILING {
            return Err(IndexError::InvalidMaxLevel);
        }
        Ok(())
    }

    /// Builder-style method to set the level ceiling
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        self.max_level = max_level;
        self
    }
}
