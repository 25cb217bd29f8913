//! Brute-force maximum subarray.
//!
//! ## Purpose
//!
//! This module finds the contiguous subarray with the largest sum, in two
//! brute-force formulations: the O(n^3) variant that recomputes each range
//! sum from scratch, and the O(n^2) variant that extends a running sum.
//!
//! ## Design notes
//!
//! * **Seeding**: Both variants seed the running best with the singleton
//!   `a[0]`, so every window down to a single element is considered and the
//!   two variants agree on every input, including all-negative ones.
//!
//! ## Invariants
//!
//! * The returned bounds are inclusive and satisfy `start <= end`.
//! * `range_sum(a, start, end) == sum` for the returned result.
//! * On all-negative input the result is the largest single element.
//!
//! ## Edge cases
//!
//! * Empty input is `EmptyInput`.

// Internal dependencies
use crate::primitives::errors::AlgokitError;

// ============================================================================
// Result Structure
// ============================================================================

/// The best subarray found: inclusive bounds into the input and its sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSubarray {
    /// Index of the first element of the subarray.
    pub start: usize,

    /// Index of the last element of the subarray (inclusive).
    pub end: usize,

    /// Sum of the elements in `start..=end`.
    pub sum: i64,
}

// ============================================================================
// Range Sum
// ============================================================================

/// Sum of `a[i..=j]`. O(n).
pub fn range_sum(a: &[i64], i: usize, j: usize) -> i64 {
    a[i..=j].iter().sum()
}

// ============================================================================
// Cubic Variant
// ============================================================================

/// Maximum subarray, recomputing every range sum from scratch. O(n^3).
pub fn max_subarray_cubic(a: &[i64]) -> Result<MaxSubarray, AlgokitError> {
    if a.is_empty() {
        return Err(AlgokitError::EmptyInput);
    }

    let mut best = MaxSubarray {
        start: 0,
        end: 0,
        sum: a[0],
    };
    for i in 0..a.len() {
        for j in i..a.len() {
            let sum = range_sum(a, i, j);
            if sum > best.sum {
                best = MaxSubarray { start: i, end: j, sum };
            }
        }
    }
    Ok(best)
}

// ============================================================================
// Quadratic Variant
// ============================================================================

/// Maximum subarray, extending a running sum per start index. O(n^2).
pub fn max_subarray_quadratic(a: &[i64]) -> Result<MaxSubarray, AlgokitError> {
    if a.is_empty() {
        return Err(AlgokitError::EmptyInput);
    }

    let mut best = MaxSubarray {
        start: 0,
        end: 0,
        sum: a[0],
    };
    for i in 0..a.len() {
        let mut sum = 0;
        for j in i..a.len() {
            sum += a[j];
            if sum > best.sum {
                best = MaxSubarray { start: i, end: j, sum };
            }
        }
    }
    Ok(best)
}
