//! Registry configuration
//!
//! Every category created by a registry uses the same filter and index
//! parameters. When `seed` is set, the level generator of each category is
//! derived from it, so the shape of every index is reproducible.

use serde::{Deserialize, Serialize};
use vr_01_membership_filter::FilterConfig;
use vr_02_ordered_index::IndexConfig;

use crate::error::RegistryError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Membership filter parameters for every category
    pub filter: FilterConfig,
    /// Ordered index parameters for every category
    pub index: IndexConfig,
    /// Seed for per-category level generators; `None` uses OS entropy
    pub seed: Option<u64>,
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), RegistryError> {
        self.filter.validate()?;
        self.index.validate()?;
        Ok(())
    }

    pub fn with_filter(mut self, filter: FilterConfig) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_index(mut self, index: IndexConfig) -> Self {
        self.index = index;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
