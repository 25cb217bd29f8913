//! Linear and sentinel search.
//!
//! ## Purpose
//!
//! This module provides the two O(n) scan searches: the plain left-to-right
//! scan, and the sentinel variant that removes the bounds test from the inner
//! loop by appending the key to the end of the data.
//!
//! ## Key concepts
//!
//! * **Sentinel**: With the key guaranteed to be present at the end, the scan
//!   loop only has to compare elements, never indices. The sentinel is popped
//!   before returning, restoring the input.
//!
//! ## Invariants
//!
//! * `sentinel_search` leaves its input vector exactly as it found it.
//!
//! ## Non-goals
//!
//! * No sortedness is assumed or exploited here; see `jump` and `binary` for
//!   searches over sorted data.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Linear Search
// ============================================================================

/// Search `a` front to back for `key`. O(n).
pub fn linear_search<T: PartialEq>(a: &[T], key: &T) -> Option<usize> {
    for (i, item) in a.iter().enumerate() {
        if item == key {
            return Some(i);
        }
    }
    None
}

// ============================================================================
// Sentinel Search
// ============================================================================

/// Search `a` for `key` using a sentinel to avoid per-step bounds checks. O(n).
///
/// Takes `&mut Vec<T>` because the key is temporarily appended as the
/// sentinel; the vector is restored before returning.
pub fn sentinel_search<T: PartialEq + Clone>(a: &mut Vec<T>, key: &T) -> Option<usize> {
    a.push(key.clone());

    let mut i = 0;
    while a[i] != *key {
        i += 1;
    }

    a.pop();
    if i < a.len() {
        Some(i)
    } else {
        None
    }
}
