//! Longest strictly ascending run.
//!
//! ## Purpose
//!
//! This module finds the longest strictly increasing contiguous run in a
//! slice, restarting the scan at every index in the original brute-force
//! style. O(n^2) worst case.
//!
//! ## Invariants
//!
//! * The returned run is strictly increasing and cannot be extended at
//!   either end.
//! * Ties go to the earliest run.
//!
//! ## Edge cases
//!
//! * Empty input is `EmptyInput`; a single element is a run of length 1.

// Internal dependencies
use crate::primitives::errors::AlgokitError;

// ============================================================================
// Result Structure
// ============================================================================

/// The longest strictly ascending run found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AscendingRun {
    /// Index of the first element of the run.
    pub start: usize,

    /// Number of elements in the run.
    pub len: usize,
}

// ============================================================================
// Longest Ascending Run
// ============================================================================

/// Find the longest strictly increasing contiguous run, restarting the scan
/// at every index. O(n^2).
pub fn longest_ascending_run<T: PartialOrd>(a: &[T]) -> Result<AscendingRun, AlgokitError> {
    if a.is_empty() {
        return Err(AlgokitError::EmptyInput);
    }

    let mut best = AscendingRun { start: 0, len: 1 };
    for i in 0..a.len() {
        let mut j = i;
        let mut len = 1;
        while j + 1 < a.len() && a[j] < a[j + 1] {
            j += 1;
            len += 1;
        }
        if len > best.len {
            best = AscendingRun { start: i, len };
        }
    }
    Ok(best)
}
