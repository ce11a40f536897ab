//! Hash functions for the membership filter
//!
//! Three independent string hashes over the key bytes, all computed with
//! wrapping 32-bit arithmetic and reduced modulo the filter size:
//!
//! | # | Name | Recurrence |
//! |---|------|------------|
//! | 1 | `djb2` | `h = h * 33 + c`, `h0 = 5381` |
//! | 2 | `sdbm` | `h = c + (h << 6) + (h << 16) - h`, `h0 = 0` |
//! | 3 | `polynomial31` | `h = h * 31 + c`, `h0 = 0` |
//!
//! The filter size need not be a power of two; the modulo is applied to the
//! full 32-bit hash.

/// Number of distinct hash algorithms available to a filter.
pub const MAX_HASH_FUNCTIONS: usize = 3;

type RawHash = fn(&[u8]) -> u32;

/// Hash algorithms in the order a filter applies them.
static HASH_FUNCTIONS: [RawHash; MAX_HASH_FUNCTIONS] = [raw_djb2, raw_sdbm, raw_polynomial31];

fn raw_djb2(key: &[u8]) -> u32 {
    key.iter().fold(5381u32, |hash, &c| {
        (hash << 5).wrapping_add(hash).wrapping_add(u32::from(c))
    })
}

fn raw_sdbm(key: &[u8]) -> u32 {
    key.iter().fold(0u32, |hash, &c| {
        u32::from(c)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash)
    })
}

fn raw_polynomial31(key: &[u8]) -> u32 {
    key.iter()
        .fold(0u32, |hash, &c| hash.wrapping_mul(31).wrapping_add(u32::from(c)))
}

/// Multiplicative hash (`* 33`), reduced into `[0, size)`.
pub fn djb2(key: &[u8], size: usize) -> usize {
    reduce(raw_djb2(key), size)
}

/// Shift-based hash, reduced into `[0, size)`.
pub fn sdbm(key: &[u8], size: usize) -> usize {
    reduce(raw_sdbm(key), size)
}

/// Multiplicative hash (`* 31`), reduced into `[0, size)`.
pub fn polynomial31(key: &[u8], size: usize) -> usize {
    reduce(raw_polynomial31(key), size)
}

#[inline]
fn reduce(hash: u32, size: usize) -> usize {
    hash as usize % size
}

/// Compute the `k` bit positions of `key` in a filter of `m` bits.
///
/// `k` is clamped to [`MAX_HASH_FUNCTIONS`]; callers validate it up front.
pub fn compute_hash_positions(key: &[u8], k: usize, m: usize) -> impl Iterator<Item = usize> + '_ {
    HASH_FUNCTIONS
        .iter()
        .take(k)
        .map(move |hash| reduce(hash(key), m))
}
