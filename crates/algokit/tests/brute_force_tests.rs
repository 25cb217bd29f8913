//! Tests for the brute-force scans.
//!
//! These tests verify:
//! - Closest pair over 2D points
//! - Both maximum-subarray variants
//! - The longest strictly ascending run
//!
//! ## Test Organization
//!
//! 1. **Closest Pair** - Known geometry, coincident points, preconditions
//! 2. **Maximum Subarray** - Known answers, variant agreement, all-negative
//! 3. **Ascending Runs** - Known runs, ties, monotone input

use algokit::prelude::*;
use approx::assert_relative_eq;

// ============================================================================
// Closest Pair Tests
// ============================================================================

/// Test a configuration where the closest pair is obvious.
#[test]
fn test_closest_pair_known() {
    let points = [(0.0, 0.0), (10.0, 0.0), (10.5, 0.0), (0.0, 8.0)];
    let pair = closest_pair(&points).unwrap();
    assert_eq!((pair.i, pair.j), (1, 2));
    assert_relative_eq!(pair.distance, 0.5);
}

/// Test that with exactly two points the pair is (0, 1).
#[test]
fn test_closest_pair_two_points() {
    let pair = closest_pair(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
    assert_eq!((pair.i, pair.j), (0, 1));
    assert_relative_eq!(pair.distance, 5.0);
}

/// Test that coincident points yield distance zero.
#[test]
fn test_closest_pair_coincident() {
    let points = [(1.0, 1.0), (5.0, 5.0), (1.0, 1.0)];
    let pair = closest_pair(&points).unwrap();
    assert_eq!((pair.i, pair.j), (0, 2));
    assert_relative_eq!(pair.distance, 0.0);
}

/// Test that fewer than two points is rejected.
#[test]
fn test_closest_pair_too_few() {
    assert_eq!(
        closest_pair::<f64>(&[]),
        Err(AlgokitError::TooFewPoints { got: 0, min: 2 })
    );
    assert_eq!(
        closest_pair(&[(1.0, 2.0)]),
        Err(AlgokitError::TooFewPoints { got: 1, min: 2 })
    );
}

/// Test that no pair in the input is closer than the reported distance.
#[test]
fn test_closest_pair_is_minimal() {
    let points: Vec<(f64, f64)> = (0..40)
        .map(|i: i32| {
            let f = f64::from(i);
            ((f * 13.0) % 29.0, (f * 7.0) % 31.0)
        })
        .collect();
    let pair = closest_pair(&points).unwrap();
    for i in 0..points.len() - 1 {
        for j in i + 1..points.len() {
            assert!(distance(points[i], points[j]) >= pair.distance);
        }
    }
}

// ============================================================================
// Maximum Subarray Tests
// ============================================================================

/// Test a hand-checked mixed-sign input: best is [2, 1] at indices 2..=3.
#[test]
fn test_max_subarray_known() {
    let a = [1, -3, 2, 1, -1];
    let expected = MaxSubarray {
        start: 2,
        end: 3,
        sum: 3,
    };
    assert_eq!(max_subarray_cubic(&a), Ok(expected));
    assert_eq!(max_subarray_quadratic(&a), Ok(expected));
}

/// Test that on all-negative input the best window is the largest single
/// element.
#[test]
fn test_max_subarray_all_negative() {
    let a = [-4, -1, -7, -2];
    let expected = MaxSubarray {
        start: 1,
        end: 1,
        sum: -1,
    };
    assert_eq!(max_subarray_cubic(&a), Ok(expected));
    assert_eq!(max_subarray_quadratic(&a), Ok(expected));
}

/// Test that on all-positive input the whole array wins.
#[test]
fn test_max_subarray_all_positive() {
    let a = [2, 5, 1, 3];
    let expected = MaxSubarray {
        start: 0,
        end: 3,
        sum: 11,
    };
    assert_eq!(max_subarray_cubic(&a), Ok(expected));
    assert_eq!(max_subarray_quadratic(&a), Ok(expected));
}

/// Test that both variants agree on deterministic pseudo-random data, and
/// that the reported sum matches the reported bounds.
#[test]
fn test_max_subarray_variants_agree() {
    let a: Vec<i64> = (0..120).map(|i: i64| (i * 37) % 41 - 20).collect();
    let cubic = max_subarray_cubic(&a).unwrap();
    let quadratic = max_subarray_quadratic(&a).unwrap();
    assert_eq!(cubic, quadratic);
    assert_eq!(range_sum(&a, cubic.start, cubic.end), cubic.sum);
}

/// Test singleton and empty inputs.
#[test]
fn test_max_subarray_trivial() {
    let singleton = MaxSubarray {
        start: 0,
        end: 0,
        sum: -5,
    };
    assert_eq!(max_subarray_cubic(&[-5]), Ok(singleton));
    assert_eq!(max_subarray_quadratic(&[-5]), Ok(singleton));

    assert_eq!(max_subarray_cubic(&[]), Err(AlgokitError::EmptyInput));
    assert_eq!(max_subarray_quadratic(&[]), Err(AlgokitError::EmptyInput));
}

// ============================================================================
// Ascending Run Tests
// ============================================================================

/// Test a hand-checked input: the run [1, 4, 5, 9] starting at index 4.
#[test]
fn test_longest_run_known() {
    let a = [1, 2, 3, 2, 1, 4, 5, 9];
    assert_eq!(
        longest_ascending_run(&a),
        Ok(AscendingRun { start: 4, len: 4 })
    );
}

/// Test that ties go to the earliest run.
#[test]
fn test_longest_run_tie() {
    let a = [3, 4, 1, 2];
    assert_eq!(
        longest_ascending_run(&a),
        Ok(AscendingRun { start: 0, len: 2 })
    );
}

/// Test monotone and constant inputs; equal neighbors do not extend a run.
#[test]
fn test_longest_run_monotone() {
    let ascending: Vec<i64> = (0..10).collect();
    assert_eq!(
        longest_ascending_run(&ascending),
        Ok(AscendingRun { start: 0, len: 10 })
    );

    let descending = [5, 4, 3, 2];
    assert_eq!(
        longest_ascending_run(&descending),
        Ok(AscendingRun { start: 0, len: 1 })
    );

    let constant = [7, 7, 7];
    assert_eq!(
        longest_ascending_run(&constant),
        Ok(AscendingRun { start: 0, len: 1 })
    );
}

/// Test singleton and empty inputs.
#[test]
fn test_longest_run_trivial() {
    assert_eq!(
        longest_ascending_run(&[42]),
        Ok(AscendingRun { start: 0, len: 1 })
    );
    assert_eq!(
        longest_ascending_run::<i64>(&[]),
        Err(AlgokitError::EmptyInput)
    );
}
