//! Sizing math: maps a target false positive probability and an expected
//! element count to a bit array size and a number of hash probes.
//!
//! These functions are pure and do not validate their inputs. Callers that
//! accept untrusted probabilities should go through
//! [`crate::input::resolve_false_positive_rate`] or [`crate::BloomParams::new`]
//! first.

use std::f64::consts::LN_2;

/// Fewest probes a filter is allowed to use.
pub const MIN_HASH_COUNT: usize = 2;

/// Most probes a filter is allowed to use.
pub const MAX_HASH_COUNT: usize = i16::MAX as usize;

/// Optimal bit array size `m = ceil(n * |ln(p)| / (ln 2)^2)`, never below 1.
pub fn compute_size(p: f64, n: usize) -> usize {
    let m = (n as f64 * p.ln().abs() / (LN_2 * LN_2)).ceil();
    // NaN casts to 0
    (m as usize).max(1)
}

/// Number of probes `k = floor(log2(1 / p))`, clamped to
/// [`MIN_HASH_COUNT`]..=[`MAX_HASH_COUNT`].
pub fn compute_hash_count(p: f64) -> usize {
    let k = (1.0 / p).log2().floor();
    (k as usize).clamp(MIN_HASH_COUNT, MAX_HASH_COUNT)
}

/// Expected false positive rate `(1 - e^{-kn/m})^k` after `n` inserts into a
/// filter of `size` bits probed `hash_count` times.
pub fn estimate_false_positive_rate(
    size: usize,
    hash_count: usize,
    n: usize,
) -> f64 {
    if size == 0 || n == 0 {
        return 0.0;
    }
    let k = hash_count as f64;
    let exponent = -(k * n as f64) / size as f64;
    (1.0 - exponent.exp()).powf(k)
}
