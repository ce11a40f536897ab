//! Level selection for new index nodes
//!
//! A node's level is drawn once, at insertion, and never changes. The
//! production policy flips an unbiased coin and climbs one level per head,
//! stopping at the first tail or at `max_level`:
//!
//! P(level = i) = 2^-(i+1) for i < max_level, with the remaining mass on
//! `max_level` itself.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of node levels for an ordered index
///
/// Implementations must return a value in `[0, max_level]`; the index clamps
/// anything larger.
pub trait LevelGenerator {
    fn random_level(&mut self, max_level: usize) -> usize;
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for Box<G> {
    fn random_level(&mut self, max_level: usize) -> usize {
        (**self).random_level(max_level)
    }
}

/// Truncated geometric levels from repeated fair coin flips
#[derive(Clone, Debug)]
pub struct CoinFlipLevels<R = StdRng> {
    rng: R,
}

impl<R: Rng> CoinFlipLevels<R> {
    /// Use an existing random number generator
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl CoinFlipLevels<StdRng> {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Deterministic sequence of levels for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for CoinFlipLevels<StdRng> {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<R: Rng> LevelGenerator for CoinFlipLevels<R> {
    fn random_level(&mut self, max_level: usize) -> usize {
        let mut level = 0;
        while level < max_level && self.rng.gen_bool(0.5) {
            level += 1;
        }
        level
    }
}

/// Replays a fixed list of levels, cycling when exhausted
///
/// Lets tests build an index with a known shape.
#[derive(Clone, Debug)]
pub struct ScriptedLevels {
    levels: Vec<usize>,
    next: usize,
}

impl ScriptedLevels {
    /// An empty script always yields level 0.
    pub fn new(levels: Vec<usize>) -> Self {
        Self {
            levels,
            next: 0,
        }
    }
}

impl LevelGenerator for ScriptedLevels {
    fn random_level(&mut self, max_level: usize) -> usize {
        if self.levels.is_empty() {
            return 0;
        }
        let level = self.levels[self.next % self.levels.len()];
        self.next += 1;
        level.min(max_level)
    }
}
