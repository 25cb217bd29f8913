//! Jump search over sorted slices.
//!
//! ## Purpose
//!
//! This module provides jump search: stride through a sorted slice in blocks
//! of sqrt(n), then linearly sweep the block that could hold the key.
//! O(sqrt n) comparisons.
//!
//! ## Invariants
//!
//! * The input must be sorted in ascending order; on unsorted input the
//!   result is unspecified (but the function does not panic).
//!
//! ## Non-goals
//!
//! * This module does not verify sortedness; the trial harness does that when
//!   it generates input.

// ============================================================================
// Jump Search
// ============================================================================

/// Search a sorted slice for `key` with sqrt(n)-sized jumps. O(sqrt n).
pub fn jump_search<T: Ord>(a: &[T], key: &T) -> Option<usize> {
    let n = a.len();
    let step = isqrt(n).max(1);

    // Jump phase: stop at the first block whose leading element passes the key.
    let mut i = 0;
    while i < n {
        if a[i] == *key {
            return Some(i);
        }
        if a[i] > *key {
            break;
        }
        i += step;
    }

    // Sweep phase: the key can only live in the block behind the overshoot.
    let start = i.saturating_sub(step);
    let end = i.min(n);
    for j in start..end {
        if a[j] == *key {
            return Some(j);
        }
    }
    None
}

/// Integer square root by incremental search; `n` is a slice length, so the
/// loop runs at most sqrt(usize::MAX of practical slices) times.
fn isqrt(n: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}
