//! # VR-03 Category Index
//!
//! Composes one membership filter and one ordered index per category
//! ("virus") into a single lookup path, and keeps every category in a
//! dynamically sized registry.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure composition, no I/O, no logging
//!   - `CategoryIndex`: filter + ordered index for one category
//!   - `LookupOutcome`: `NotFound` / `Found` / `FalsePositive`
//!   - `RegistryConfig`: filter, index and seeding parameters
//!
//! - **Ports Layer** (`ports/`): `VaccinationRegistryApi` driving port
//!
//! - **Service Layer** (`service/`): `CategoryRegistry`, category name →
//!   `CategoryIndex`, created on first sight of a category
//!
//! - **Metrics** (`metrics`): lookup outcome counters
//!
//! ## Lookup Path
//!
//! ```text
//! lookup(id) ──→ filter.check(id) ──false──→ NotFound        (no index search)
//!                      │
//!                    true
//!                      ↓
//!                index.search(id) ──hit───→ Found(record)
//!                      │
//!                    miss
//!                      ↓
//!                FalsePositive
//! ```
//!
//! ## Invariants
//!
//! - `lookup` never returns `Found` for a key that was never recorded.
//! - `lookup` never returns `NotFound` for a key that was recorded.
//! - Only vaccinated records enter a category index.

pub mod domain;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use domain::{CategoryIndex, LookupOutcome, RegistryConfig};
pub use error::{CategoryError, RegistryError};
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::VaccinationRegistryApi;
pub use service::{CategoryRegistry, RecordOutcome};
