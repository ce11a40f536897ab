//! Error types for the Membership Filter subsystem

use thiserror::Error;

/// Errors that can occur while building a membership filter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Allocation failed: could not reserve {bytes} bytes for the bit array")]
    AllocationFailed { bytes: usize },

    #[error("Invalid filter size: must be at least 1 bit")]
    InvalidSize,

    #[error("Invalid hash count: {count} (must be between 1 and {max})")]
    InvalidHashCount { count: usize, max: usize },
}
