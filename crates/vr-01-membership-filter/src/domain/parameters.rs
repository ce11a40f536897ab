//! False positive estimation
//!
//! FPR = (1 - e^(-kn/m))^k
//!
//! The filter size and hash count are fixed at construction, so this is only
//! used to report how saturated a filter has become.

/// Calculate the false positive rate for given parameters
///
/// * `m` - size in bits
/// * `n` - number of insertions
/// * `k` - number of hash functions
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
