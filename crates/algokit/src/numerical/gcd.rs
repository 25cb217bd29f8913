//! Greatest common divisor by Euclid's recursion.
//!
//! ## Purpose
//!
//! This module provides the recursive Euclidean algorithm. O(log min(a, b))
//! divisions.
//!
//! ## Invariants
//!
//! * `gcd(a, 0) == a` for any `a`, including `gcd(0, 0) == 0`.
//! * The result divides both arguments.

// ============================================================================
// Euclidean GCD
// ============================================================================

/// Greatest common divisor of `a` and `b` by recursive Euclid.
/// O(log min(a, b)).
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
