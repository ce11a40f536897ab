//! Domain Layer - Category composition
//!
//! RULES:
//! - No I/O operations
//! - No logging; every condition is returned to the caller

pub mod category_index;
pub mod config;

pub use category_index::{CategoryIndex, LookupOutcome};
pub use config::RegistryConfig;
