//! Tests for the seeded input generators.
//!
//! ## Test Organization
//!
//! 1. **Determinism** - Same seed, same output; different seed, different
//!    output
//! 2. **Shape** - Sizes, ranges, and the documented structural guarantees

use algolab::generate;
use std::collections::HashSet;

// ============================================================================
// Determinism Tests
// ============================================================================

/// Test that every generator is a pure function of its size and seed.
#[test]
fn test_same_seed_same_output() {
    assert_eq!(generate::uniform_ints(100, 7), generate::uniform_ints(100, 7));
    assert_eq!(
        generate::uniform_pairs(50, 99, 7),
        generate::uniform_pairs(50, 99, 7)
    );
    assert_eq!(
        generate::sorted_with_needle(100, 7),
        generate::sorted_with_needle(100, 7)
    );
    assert_eq!(generate::alphanumeric(64, 7), generate::alphanumeric(64, 7));
    assert_eq!(
        generate::embedded_pattern(64, 8, 7),
        generate::embedded_pattern(64, 8, 7)
    );
    assert_eq!(
        generate::distinct_points(50, 7),
        generate::distinct_points(50, 7)
    );
    assert_eq!(
        generate::float_coefficients(10, 3.0, 7),
        generate::float_coefficients(10, 3.0, 7)
    );
}

/// Test that different seeds produce different data.
#[test]
fn test_different_seed_different_output() {
    assert_ne!(generate::uniform_ints(100, 1), generate::uniform_ints(100, 2));
    assert_ne!(generate::alphanumeric(64, 1), generate::alphanumeric(64, 2));
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test sizes and the documented value range of the integer generator.
#[test]
fn test_uniform_ints_shape() {
    let n = 200;
    let a = generate::uniform_ints(n, 42);
    assert_eq!(a.len(), n);
    let span = n as i64;
    assert!(a.iter().all(|&v| (-span..=span).contains(&v)));
}

/// Test that pair operands respect the configured maximum.
#[test]
fn test_uniform_pairs_shape() {
    let pairs = generate::uniform_pairs(100, 9, 42);
    assert_eq!(pairs.len(), 100);
    assert!(pairs.iter().all(|&(a, b)| a <= 9 && b <= 9));
}

/// Test that the needle array is sorted and contains its needle.
#[test]
fn test_sorted_with_needle_shape() {
    let (a, needle) = generate::sorted_with_needle(500, 42);
    assert_eq!(a.len(), 500);
    assert!(a.windows(2).all(|w| w[0] <= w[1]));
    assert!(a.contains(&needle));
}

/// Test that generated text is ASCII alphanumeric of the requested length.
#[test]
fn test_alphanumeric_shape() {
    let s = generate::alphanumeric(128, 42);
    assert_eq!(s.len(), 128);
    assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
}

/// Test that the embedded pattern really is a slice of the text at the
/// returned offset.
#[test]
fn test_embedded_pattern_shape() {
    let (text, pattern, offset) = generate::embedded_pattern(100, 10, 42);
    assert_eq!(text.len(), 100);
    assert_eq!(pattern.len(), 10);
    assert_eq!(&text[offset..offset + 10], pattern);
}

/// Test that generated points are pairwise distinct.
#[test]
fn test_distinct_points_shape() {
    let points = generate::distinct_points(300, 42);
    assert_eq!(points.len(), 300);
    let unique: HashSet<(i64, i64)> = points
        .iter()
        .map(|&(x, y)| (x as i64, y as i64))
        .collect();
    assert_eq!(unique.len(), points.len());
}

/// Test that a degree-d request yields d + 1 in-range coefficients.
#[test]
fn test_float_coefficients_shape() {
    let coeffs = generate::float_coefficients(7, 3.0, 42);
    assert_eq!(coeffs.len(), 8);
    assert!(coeffs.iter().all(|&c| (0.0..=3.0).contains(&c)));
}
