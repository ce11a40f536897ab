//! # VR-01 Membership Filter
//!
//! Probabilistic membership filter answering "might this key exist?" for a
//! category index.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `MembershipFilter`: fixed-size bit vector plus `hash_count` string hashes
//!   - `FilterConfig` / `FilterConfigBuilder`: validated construction parameters
//!   - `hash_functions`: three independent 32-bit string hashes
//!
//! ## Invariants
//!
//! - **No false negatives**: once `insert(key)` returned, `check(key)` is true forever.
//! - **Monotonic bits**: bits only transition 0 → 1; the size never changes.
//! - False positives are possible: FPR ≈ (1 - e^(-kn/m))^k.
//!
//! ## Usage Example
//!
//! ```
//! use vr_01_membership_filter::MembershipFilter;
//!
//! let mut filter = MembershipFilter::new(10_000, 3)?;
//! filter.insert("10002");
//!
//! assert!(filter.check("10002"));
//! # Ok::<(), vr_01_membership_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{FilterConfig, FilterConfigBuilder, MembershipFilter, MAX_HASH_FUNCTIONS};
pub use error::FilterError;
