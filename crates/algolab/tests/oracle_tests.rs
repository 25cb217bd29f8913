//! Tests for the reference implementations the trials cross-check against.
//!
//! ## Test Organization
//!
//! 1. **Sorting** - Reference sort and sortedness predicate
//! 2. **Numerics** - Iterative GCD and the Horner fold
//! 3. **Arrays and Geometry** - Kadane's scan and the closest-distance check

use algolab::oracle;
use approx::assert_relative_eq;

// ============================================================================
// Sorting Oracles
// ============================================================================

/// Test that the reference sort leaves its input alone and returns a sorted
/// copy.
#[test]
fn test_reference_sort() {
    let a = vec![3, 1, 2];
    let sorted = oracle::reference_sort(&a);
    assert_eq!(a, vec![3, 1, 2]);
    assert_eq!(sorted, vec![1, 2, 3]);
}

/// Test the sortedness predicate on sorted, unsorted, and trivial input.
#[test]
fn test_is_sorted() {
    assert!(oracle::is_sorted::<i64>(&[]));
    assert!(oracle::is_sorted(&[5]));
    assert!(oracle::is_sorted(&[1, 2, 2, 3]));
    assert!(!oracle::is_sorted(&[1, 3, 2]));
}

// ============================================================================
// Numeric Oracles
// ============================================================================

/// Test iterative Euclid on known values and zero operands.
#[test]
fn test_reference_gcd() {
    assert_eq!(oracle::reference_gcd(48, 36), 12);
    assert_eq!(oracle::reference_gcd(17, 5), 1);
    assert_eq!(oracle::reference_gcd(0, 9), 9);
    assert_eq!(oracle::reference_gcd(9, 0), 9);
}

/// Test the Horner fold on 1 + 2x + 3x^2 at x = 4 and on an empty
/// coefficient slice (value 0).
#[test]
fn test_reference_polyval() {
    assert_relative_eq!(oracle::reference_polyval(&[1.0, 2.0, 3.0], 4.0), 57.0);
    assert_relative_eq!(oracle::reference_polyval(&[], 2.0), 0.0);
    assert_relative_eq!(oracle::reference_polyval(&[5.0], 100.0), 5.0);
}

// ============================================================================
// Array and Geometry Oracles
// ============================================================================

/// Test Kadane's scan on mixed-sign, all-negative, and empty input.
#[test]
fn test_reference_max_subarray_sum() {
    assert_eq!(
        oracle::reference_max_subarray_sum(&[1, -3, 2, 1, -1]),
        Some(3)
    );
    assert_eq!(oracle::reference_max_subarray_sum(&[-4, -1, -7]), Some(-1));
    assert_eq!(oracle::reference_max_subarray_sum(&[]), None);
}

/// Test the closest-distance check: the true minimum (and anything below
/// it) passes, anything above it is refuted by the closer pair.
#[test]
fn test_verify_closest_distance() {
    let points = [(0.0, 0.0), (3.0, 4.0), (3.0, 5.0)];
    assert!(oracle::verify_closest_distance(&points, 1.0));
    assert!(oracle::verify_closest_distance(&points, 0.5));
    assert!(!oracle::verify_closest_distance(&points, 1.5));
}
