//! # VR-02 Ordered Index
//!
//! Randomized multi-level linked index (skip list) keyed by a unique string
//! id, answering exact lookups and ascending traversal.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`):
//!   - `OrderedIndex`: arena of nodes addressed by `NodeId`; each node owns a
//!     forward array of `level + 1` links
//!   - `LevelGenerator`: injectable source of node levels
//!     (`CoinFlipLevels` for production, `ScriptedLevels` for tests)
//!   - `IndexConfig`: validated `max_level`
//!
//! ## Invariants
//!
//! - Level 0 is a strictly ascending chain of every key, without duplicates.
//! - Every higher level is an order-preserving subsequence of level 0.
//! - `current_level <= max_level`; it starts at 0 and never decreases.
//! - A failed insert (duplicate or allocation) leaves the index unchanged.
//!
//! ## Usage Example
//!
//! ```
//! use vr_02_ordered_index::{CoinFlipLevels, OrderedIndex};
//!
//! let mut index = OrderedIndex::with_generator(4, CoinFlipLevels::seeded(42))?;
//! index.insert("30001", "c")?;
//! index.insert("10002", "a")?;
//! index.insert("20003", "b")?;
//!
//! let keys: Vec<&str> = index.iter().map(|node| node.key()).collect();
//! assert_eq!(keys, ["10002", "20003", "30001"]);
//! assert_eq!(index.get("20003"), Some(&"b"));
//! # Ok::<(), vr_02_ordered_index::IndexError>(())
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{
    CoinFlipLevels, IndexConfig, Iter, LevelGenerator, NodeId, NodeRef, OrderedIndex,
    ScriptedLevels, StructureView, MAX_LEVEL_CEILING,
};
pub use error::IndexError;
