//! Tests for the numerical routines.
//!
//! These tests verify:
//! - Euclid's GCD
//! - Checked integer exponentiation, naive and by squaring
//! - The three polynomial evaluators
//!
//! ## Test Organization
//!
//! 1. **GCD** - Known values and edge operands
//! 2. **Powers** - Agreement, identities, overflow reporting
//! 3. **Polynomials** - Known values, evaluator agreement, preconditions

use algokit::prelude::*;
use approx::assert_relative_eq;

// ============================================================================
// GCD Tests
// ============================================================================

/// Test GCD against hand-checked values.
#[test]
fn test_gcd_known_values() {
    assert_eq!(gcd(48, 36), 12);
    assert_eq!(gcd(36, 48), 12);
    assert_eq!(gcd(17, 5), 1);
    assert_eq!(gcd(100, 100), 100);
    assert_eq!(gcd(270, 192), 6);
}

/// Test GCD with zero operands; gcd(a, 0) is a and gcd(0, 0) is 0.
#[test]
fn test_gcd_zero_operands() {
    assert_eq!(gcd(7, 0), 7);
    assert_eq!(gcd(0, 7), 7);
    assert_eq!(gcd(0, 0), 0);
}

// ============================================================================
// Power Tests
// ============================================================================

/// Test both exponentiation strategies against known values.
#[test]
fn test_power_known_values() {
    assert_eq!(power(2, 10), Ok(1024));
    assert_eq!(fast_power(2, 10), Ok(1024));
    assert_eq!(power(3, 4), Ok(81));
    assert_eq!(fast_power(3, 4), Ok(81));
    assert_eq!(power(10, 0), Ok(1));
    assert_eq!(fast_power(10, 0), Ok(1));
    assert_eq!(power(0, 5), Ok(0));
    assert_eq!(fast_power(0, 5), Ok(0));
}

/// Test that the naive and squaring strategies agree across a grid of
/// operands that stay within u64.
#[test]
fn test_power_strategies_agree() {
    for base in 0..=10u64 {
        for exponent in 0..=15u32 {
            assert_eq!(
                power(base, exponent),
                fast_power(base, exponent),
                "disagreement at {base}^{exponent}"
            );
        }
    }
}

/// Test the largest representable power of two and the first overflow.
#[test]
fn test_power_overflow_boundary() {
    assert_eq!(power(2, 63), Ok(1 << 63));
    assert_eq!(fast_power(2, 63), Ok(1 << 63));
    assert_eq!(
        power(2, 64),
        Err(AlgokitError::Overflow {
            base: 2,
            exponent: 64
        })
    );
    assert_eq!(
        fast_power(2, 64),
        Err(AlgokitError::Overflow {
            base: 2,
            exponent: 64
        })
    );
}

// ============================================================================
// Polynomial Tests
// ============================================================================

/// Test all three evaluators on 1 + 2x + 3x^2 at x = 4 (value 57).
#[test]
fn test_polynomial_known_value() {
    let coeffs = [1.0, 2.0, 3.0];
    assert_relative_eq!(evaluate_terms(&coeffs, 4.0).unwrap(), 57.0);
    assert_relative_eq!(evaluate_cached_power(&coeffs, 4.0).unwrap(), 57.0);
    assert_relative_eq!(evaluate_horner(&coeffs, 4.0).unwrap(), 57.0);
}

/// Test a constant polynomial at several points.
#[test]
fn test_polynomial_constant() {
    let coeffs = [5.5];
    for x in [-2.0, 0.0, 3.0] {
        assert_relative_eq!(evaluate_terms(&coeffs, x).unwrap(), 5.5);
        assert_relative_eq!(evaluate_cached_power(&coeffs, x).unwrap(), 5.5);
        assert_relative_eq!(evaluate_horner(&coeffs, x).unwrap(), 5.5);
    }
}

/// Test that x = 0 yields the constant term; the cached-power evaluator
/// special-cases this to avoid dividing by zero.
#[test]
fn test_polynomial_at_zero() {
    let coeffs = [2.5, -1.0, 4.0, 7.0];
    assert_relative_eq!(evaluate_terms(&coeffs, 0.0).unwrap(), 2.5);
    assert_relative_eq!(evaluate_cached_power(&coeffs, 0.0).unwrap(), 2.5);
    assert_relative_eq!(evaluate_horner(&coeffs, 0.0).unwrap(), 2.5);
}

/// Test that the three evaluators agree on a longer coefficient set,
/// including negative x.
#[test]
fn test_polynomial_evaluators_agree() {
    let coeffs: Vec<f64> = (0..20).map(|k| (k as f64) * 0.3 - 2.0).collect();
    for x in [-1.5, -0.5, 0.5, 1.0, 2.0] {
        let terms = evaluate_terms(&coeffs, x).unwrap();
        let cached = evaluate_cached_power(&coeffs, x).unwrap();
        let horner = evaluate_horner(&coeffs, x).unwrap();
        assert_relative_eq!(terms, horner, max_relative = 1e-12);
        assert_relative_eq!(cached, horner, max_relative = 1e-12);
    }
}

/// Test that an empty coefficient slice is rejected by all evaluators.
#[test]
fn test_polynomial_empty_coefficients() {
    let empty: [f64; 0] = [];
    assert_eq!(evaluate_terms(&empty, 1.0), Err(AlgokitError::EmptyInput));
    assert_eq!(
        evaluate_cached_power(&empty, 1.0),
        Err(AlgokitError::EmptyInput)
    );
    assert_eq!(evaluate_horner(&empty, 1.0), Err(AlgokitError::EmptyInput));
}
