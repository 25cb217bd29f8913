//! Trusted reference computations.
//!
//! ## Purpose
//!
//! This module provides the reference implementations trials cross-check
//! against. Each oracle is either the standard library's own routine or an
//! independent formulation of the algorithm under trial (iterative where the
//! trial subject recurses, O(n) where the subject is brute force), so a
//! shared bug cannot hide a failure.
//!
//! ## Invariants
//!
//! * Oracles never call into `algokit`.
//!
//! ## Non-goals
//!
//! * Oracles are not benchmarked; clarity beats speed here.

// ============================================================================
// Sorting
// ============================================================================

/// Reference sort: the standard library's unstable sort on a copy.
pub fn reference_sort(a: &[i64]) -> Vec<i64> {
    let mut sorted = a.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Whether `a` is in ascending order.
pub fn is_sorted<T: PartialOrd>(a: &[T]) -> bool {
    a.windows(2).all(|w| w[0] <= w[1])
}

// ============================================================================
// Numerical
// ============================================================================

/// Reference GCD: iterative Euclid, independent of the recursive subject.
pub fn reference_gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reference polynomial evaluation: an iterative Horner fold over the
/// coefficients in descending degree order.
pub fn reference_polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

// ============================================================================
// Brute Force
// ============================================================================

/// Reference maximum subarray sum: Kadane's O(n) scan. Returns `None` on
/// empty input; on all-negative input the largest single element.
pub fn reference_max_subarray_sum(a: &[i64]) -> Option<i64> {
    let (&first, rest) = a.split_first()?;
    let mut best = first;
    let mut current = first;
    for &v in rest {
        current = v.max(current + v);
        best = best.max(current);
    }
    Some(best)
}

/// Verify that no pair of points is strictly closer than `reported`.
pub fn verify_closest_distance(points: &[(f64, f64)], reported: f64) -> bool {
    for i in 0..points.len().saturating_sub(1) {
        for j in i + 1..points.len() {
            let dx = points[i].0 - points[j].0;
            let dy = points[i].1 - points[j].1;
            if (dx * dx + dy * dy).sqrt() < reported {
                return false;
            }
        }
    }
    true
}
