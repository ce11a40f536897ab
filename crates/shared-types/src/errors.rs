//! # Error Types
//!
//! Errors raised while constructing shared entities.

use thiserror::Error;

/// Errors that can occur while building a [`crate::Record`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The citizen id is the index key and must not be empty.
    #[error("Citizen id must not be empty")]
    EmptyId,

    /// A required field was never supplied to the builder.
    #[error("Record {id}: missing field `{field}`")]
    MissingField { id: String, field: &'static str },

    /// A vaccination date was supplied for a citizen who is not vaccinated.
    #[error("Record {id}: vaccination date given but status is NO")]
    DateWithoutVaccination { id: String },

    /// Status flag other than `YES` / `NO`.
    #[error("Invalid vaccination status: {0} (expected YES or NO)")]
    InvalidStatus(String),
}
