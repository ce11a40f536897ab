//! # Shared Types Crate
//!
//! This crate contains the vaccination [`Record`] stored by every category
//! index, together with its [`VaccinationStatus`] and construction errors.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: the record payload is defined once, here.
//! - **Fully Populated**: a `Record` can only be obtained through
//!   [`RecordBuilder::build`], which rejects missing fields.
//! - **Immutable Key**: the citizen id is fixed at construction and has no
//!   setter.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
