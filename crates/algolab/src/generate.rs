//! Seeded random input generation.
//!
//! ## Purpose
//!
//! This module generates the random inputs the trials run against: integer
//! arrays, sorted arrays with a known-present needle, alphanumeric text with
//! an embedded pattern, distinct 2D points, and polynomial coefficients.
//!
//! ## Design notes
//!
//! * **Reproducible**: Every generator takes an explicit seed and drives a
//!   `StdRng`, so a failing trial can be replayed exactly.
//! * **Ranges**: Value ranges follow the array size (elements of an n-array
//!   are drawn from `[-n, n]`), keeping duplicate density roughly constant
//!   across sizes.
//!
//! ## Invariants
//!
//! * The same seed and size always produce the same output.
//! * `sorted_with_needle` returns a sorted array and a needle that is
//!   present in it.
//! * `embedded_pattern` returns a pattern sliced out of the text at the
//!   returned offset.
//! * `distinct_points` returns pairwise distinct points.
//!
//! ## Non-goals
//!
//! * This module does not validate sizes; trials do that before generating.

// External dependencies
use rand::distr::{Alphanumeric, SampleString};
use rand::prelude::*;

// Standard library
use std::collections::HashSet;

// ============================================================================
// Integer Arrays
// ============================================================================

/// Generate `n` integers uniformly drawn from `[-n, n]`.
pub fn uniform_ints(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = n as i64;
    (0..n).map(|_| rng.random_range(-span..=span)).collect()
}

/// Generate `n` integer pairs uniformly drawn from `[0, max]`.
pub fn uniform_pairs(n: usize, max: u64, seed: u64) -> Vec<(u64, u64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.random_range(0..=max), rng.random_range(0..=max)))
        .collect()
}

/// Generate a sorted array of `n` integers in `[0, n]`, plus a needle drawn
/// from the array itself.
pub fn sorted_with_needle(n: usize, seed: u64) -> (Vec<i64>, i64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a: Vec<i64> = (0..n).map(|_| rng.random_range(0..=n as i64)).collect();
    a.sort_unstable();
    let needle = a[rng.random_range(0..n)];
    (a, needle)
}

// ============================================================================
// Text
// ============================================================================

/// Generate a random alphanumeric string of `len` characters.
pub fn alphanumeric(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    Alphanumeric.sample_string(&mut rng, len)
}

/// Generate random alphanumeric text of `text_len` characters and slice a
/// pattern of `pattern_len` characters out of it at a random offset.
/// Returns `(text, pattern, offset)`.
pub fn embedded_pattern(text_len: usize, pattern_len: usize, seed: u64) -> (String, String, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let text = Alphanumeric.sample_string(&mut rng, text_len);
    let offset = rng.random_range(0..=text_len - pattern_len);
    let pattern = text[offset..offset + pattern_len].to_string();
    (text, pattern, offset)
}

// ============================================================================
// Geometry
// ============================================================================

/// Generate `n` pairwise distinct integer-grid points in `[0, n] x [0, n]`,
/// as `f64` coordinates.
pub fn distinct_points(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let span = n as i64;
    let mut seen: HashSet<(i64, i64)> = HashSet::with_capacity(n);
    let mut points = Vec::with_capacity(n);
    while points.len() < n {
        let candidate = (rng.random_range(0..=span), rng.random_range(0..=span));
        if seen.insert(candidate) {
            points.push((candidate.0 as f64, candidate.1 as f64));
        }
    }
    points
}

// ============================================================================
// Polynomial Coefficients
// ============================================================================

/// Generate `degree + 1` coefficients uniformly drawn from `[0, max]`, in
/// ascending degree order.
pub fn float_coefficients(degree: usize, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..=degree).map(|_| rng.random_range(0.0..=max)).collect()
}
