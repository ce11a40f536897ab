//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Core membership filter
//! - Hash functions
//! - False positive estimation
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - No logging

pub mod config;
pub mod hash_functions;
pub mod membership_filter;
pub mod parameters;

pub use config::{FilterConfig, FilterConfigBuilder};
pub use hash_functions::MAX_HASH_FUNCTIONS;
pub use membership_filter::MembershipFilter;
pub use parameters::calculate_fpr;
