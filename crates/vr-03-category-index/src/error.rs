//! Error types for the Category Index subsystem

use thiserror::Error;
use vr_01_membership_filter::FilterError;
use vr_02_ordered_index::IndexError;

/// Errors raised by a single category index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    #[error("Record {id} is not vaccinated and cannot be indexed")]
    NotVaccinated { id: String },

    #[error("Record {id} belongs to {found}, not {expected}")]
    CategoryMismatch {
        id: String,
        expected: String,
        found: String,
    },
}

impl CategoryError {
    /// True when the record was rejected because its id is already indexed
    pub fn is_duplicate(&self) -> bool {
        matches!(self, CategoryError::Index(IndexError::DuplicateKey { .. }))
    }
}

/// Errors raised by the category registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Virus not found: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Category(#[from] CategoryError),
}

impl From<FilterError> for RegistryError {
    fn from(err: FilterError) -> Self {
        RegistryError::Category(err.into())
    }
}

impl From<IndexError> for RegistryError {
    fn from(err: IndexError) -> Self {
        RegistryError::Category(err.into())
    }
}
