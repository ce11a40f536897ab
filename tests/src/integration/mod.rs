//! # Integration Tests
//!
//! - `flows`: record file through loader, registry and shell
//! - `lookup_properties`: lookup guarantees across the crate boundary

pub mod flows;
pub mod lookup_properties;
