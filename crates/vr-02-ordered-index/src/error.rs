//! Error types for the Ordered Index subsystem

use thiserror::Error;

/// Errors that can occur in the ordered index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// The key is already present; the index was left unchanged.
    #[error("Duplicate key: {key}")]
    DuplicateKey { key: String },

    /// Memory for a node or forward array could not be reserved.
    #[error("Allocation failed: {what}")]
    AllocationFailed { what: &'static str },

    #[error("Invalid max level: must be between 1 and 64")]
    InvalidMaxLevel,
}
