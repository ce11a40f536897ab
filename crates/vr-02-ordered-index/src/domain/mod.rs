//! Domain Layer - Pure index logic
//!
//! RULES:
//! - No I/O operations
//! - No logging
//! - Randomness only through an injected `LevelGenerator`

pub mod config;
pub mod level;
pub mod ordered_index;

pub use config::{IndexConfig, MAX_LEVEL_CEILING};
pub use level::{CoinFlipLevels, LevelGenerator, ScriptedLevels};
pub use ordered_index::{Iter, NodeId, NodeRef, OrderedIndex, StructureView};
