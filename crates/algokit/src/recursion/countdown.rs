//! Recursive countdown.
//!
//! ## Purpose
//!
//! The simplest recursion exercise: visit `n, n-1, ..., 1`. O(n) time and
//! O(n) stack.
//!
//! ## Edge cases
//!
//! * `countdown(0, ..)` visits nothing.

// ============================================================================
// Countdown
// ============================================================================

/// Visit `n` down to 1. Recursion depth equals `n`.
pub fn countdown<F: FnMut(u64)>(n: u64, visit: &mut F) {
    if n > 0 {
        visit(n);
        countdown(n - 1, visit);
    }
}
