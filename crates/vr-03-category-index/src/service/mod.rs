//! Service Layer - Registry orchestration

pub mod registry_service;

pub use registry_service::{CategoryRegistry, RecordOutcome};
