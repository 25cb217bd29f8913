//! Recursive polynomial evaluation.
//!
//! ## Purpose
//!
//! This module provides three recursive evaluators for a polynomial given by
//! its coefficients in ascending degree order (`a[0] + a[1] x + ... +
//! a[n] x^n`): the naive term-by-term sum, the cached-power variant, and the
//! Horner scheme.
//!
//! ## Design notes
//!
//! * **Generics**: All evaluators are generic over `num_traits::Float`.
//! * **Cost ladder**: `evaluate_terms` recomputes each power and is O(n^2)
//!   multiplications; `evaluate_cached_power` carries `x^(k+1)` down the
//!   recursion and is O(n); `evaluate_horner` is the canonical O(n) scheme
//!   with one multiply and one add per coefficient.
//!
//! ## Key concepts
//!
//! * **Cached power**: The recursion receives `x^(k+1)` and divides by `x`
//!   once per level to obtain `x^k`, trading repeated exponentiation for a
//!   single division.
//!
//! ## Invariants
//!
//! * All three evaluators agree (up to floating-point rounding) on any
//!   non-empty coefficient slice and finite `x`.
//!
//! ## Edge cases
//!
//! * Empty coefficients are `EmptyInput`.
//! * At `x == 0` the cached power cannot be divided down; every term but the
//!   constant vanishes there, so `evaluate_cached_power` returns `a[0]`
//!   directly.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::AlgokitError;

// ============================================================================
// Term-by-Term Evaluation
// ============================================================================

/// Evaluate the polynomial by summing `a[k] * x^k` term by term. O(n^2)
/// multiplications, recursion depth equal to the degree.
pub fn evaluate_terms<T: Float>(coefficients: &[T], x: T) -> Result<T, AlgokitError> {
    if coefficients.is_empty() {
        return Err(AlgokitError::EmptyInput);
    }
    Ok(term_sum(coefficients, x, coefficients.len() - 1))
}

/// Sum of the terms of degree `0..=k`.
fn term_sum<T: Float>(coefficients: &[T], x: T, k: usize) -> T {
    if k == 0 {
        coefficients[0]
    } else {
        coefficients[k] * x.powi(k as i32) + term_sum(coefficients, x, k - 1)
    }
}

// ============================================================================
// Cached-Power Evaluation
// ============================================================================

/// Evaluate the polynomial carrying `x^(k+1)` down the recursion. O(n)
/// multiplications.
pub fn evaluate_cached_power<T: Float>(coefficients: &[T], x: T) -> Result<T, AlgokitError> {
    if coefficients.is_empty() {
        return Err(AlgokitError::EmptyInput);
    }
    // Every non-constant term vanishes at x == 0, and the cached power
    // cannot be divided down there.
    if x == T::zero() {
        return Ok(coefficients[0]);
    }
    let degree = coefficients.len() - 1;
    let cached = x.powi(degree as i32 + 1);
    Ok(cached_sum(coefficients, x, cached, degree))
}

/// Sum of the terms of degree `0..=k`, given `cached == x^(k+1)`.
fn cached_sum<T: Float>(coefficients: &[T], x: T, cached: T, k: usize) -> T {
    if k == 0 {
        coefficients[0]
    } else {
        let power = cached / x;
        coefficients[k] * power + cached_sum(coefficients, x, power, k - 1)
    }
}

// ============================================================================
// Horner Evaluation
// ============================================================================

/// Evaluate the polynomial with the recursive Horner scheme. O(n)
/// multiplications, one multiply and one add per coefficient.
pub fn evaluate_horner<T: Float>(coefficients: &[T], x: T) -> Result<T, AlgokitError> {
    if coefficients.is_empty() {
        return Err(AlgokitError::EmptyInput);
    }
    Ok(horner(coefficients, x, 0))
}

/// Horner step: `a[k] + x * (a[k+1] + x * (...))`.
fn horner<T: Float>(coefficients: &[T], x: T, k: usize) -> T {
    let degree = coefficients.len() - 1;
    if k == degree {
        coefficients[degree]
    } else {
        coefficients[k] + x * horner(coefficients, x, k + 1)
    }
}
