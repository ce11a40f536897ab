//! Core membership filter implementation
//!
//! INVARIANTS:
//! - No false negatives: if inserted, `check()` MUST return true
//! - Bits only ever go from 0 to 1; `size_bits` never changes

use bitvec::prelude::*;

use super::config::FilterConfig;
use super::hash_functions::compute_hash_positions;
use super::parameters::calculate_fpr;
use crate::error::FilterError;

/// Membership filter for probabilistic "might this key exist?" queries
///
/// Bit `h` lives in byte `h / 8` at bit `h % 8` (LSB first). The filter is
/// exclusively owned by its category index and never shared.
#[derive(Clone, Debug)]
pub struct MembershipFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of insert calls (n), duplicates included
    n: usize,
}

impl MembershipFilter {
    /// Create an all-zero filter of `size_bits` bits using `hash_count` hashes
    ///
    /// Reserves `ceil(size_bits / 8)` bytes; a failed reservation is reported
    /// as [`FilterError::AllocationFailed`] instead of aborting.
    pub fn new(size_bits: usize, hash_count: usize) -> Result<Self, FilterError> {
        Self::from_config(&FilterConfig::new(size_bits, hash_count)?)
    }

    /// Create a filter from a configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;

        let bytes = config.storage_bytes();
        let mut raw: Vec<u8> = Vec::new();
        raw.try_reserve_exact(bytes)
            .map_err(|_| FilterError::AllocationFailed { bytes })?;
        raw.resize(bytes, 0);

        let mut bits = BitVec::<u8, Lsb0>::from_vec(raw);
        bits.truncate(config.size_bits);

        Ok(Self {
            bits,
            k: config.hash_count,
            m: config.size_bits,
            n: 0,
        })
    }

    /// Insert a key into the filter
    ///
    /// Idempotent with respect to the bit array: inserting the same key again
    /// sets no new bits.
    pub fn insert(&mut self, key: &str) {
        for pos in compute_hash_positions(key.as_bytes(), self.k, self.m) {
            self.bits.set(pos, true);
        }
        self.n += 1;
    }

    /// Test if a key might be in the filter
    ///
    /// - `true`: possibly present (could be a false positive)
    /// - `false`: definitely absent (never a false negative)
    pub fn check(&self, key: &str) -> bool {
        compute_hash_positions(key.as_bytes(), self.k, self.m).all(|pos| self.bits[pos])
    }

    /// Estimated false positive rate after `elements_inserted()` insertions
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of insert calls made so far
    pub fn elements_inserted(&self) -> usize {
        self.n
    }

    /// Raw backing bytes, `ceil(size_bits / 8)` long.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}
