//! Checked integer exponentiation.
//!
//! ## Purpose
//!
//! This module provides the O(n) repeated-multiplication exponential and the
//! O(log n) exponentiation-by-squaring variant. Both are checked: overflow
//! yields `AlgokitError::Overflow` instead of wrapping.
//!
//! ## Key concepts
//!
//! * **Squaring**: `fast_power` halves the exponent each step, squaring the
//!   running base. The base is only squared while exponent bits remain, so a
//!   square that the result never needs cannot fail the computation early.
//!
//! ## Invariants
//!
//! * `power(b, 0) == 1` for every base, including 0.
//! * `power` and `fast_power` agree wherever both succeed.

// Internal dependencies
use crate::primitives::errors::AlgokitError;

// ============================================================================
// Repeated Multiplication
// ============================================================================

/// Compute `base^exponent` by repeated multiplication. O(n) multiplications.
pub fn power(base: u64, exponent: u32) -> Result<u64, AlgokitError> {
    let mut product: u64 = 1;
    for _ in 0..exponent {
        product = product
            .checked_mul(base)
            .ok_or(AlgokitError::Overflow { base, exponent })?;
    }
    Ok(product)
}

// ============================================================================
// Exponentiation by Squaring
// ============================================================================

/// Compute `base^exponent` by squaring. O(log n) multiplications.
pub fn fast_power(base: u64, exponent: u32) -> Result<u64, AlgokitError> {
    let overflow = AlgokitError::Overflow { base, exponent };

    let mut result: u64 = 1;
    let mut square = base;
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square).ok_or(overflow)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.checked_mul(square).ok_or(overflow)?;
        }
    }
    Ok(result)
}
