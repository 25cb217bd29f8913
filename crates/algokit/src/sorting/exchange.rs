//! Exchange sort.
//!
//! ## Purpose
//!
//! This module provides exchange sort (sometimes taught as "natural" sort):
//! compare each position against every later element and swap whenever the
//! pair is out of order. After pass `i`, position `i` holds its final value.
//! O(n^2).

// ============================================================================
// Exchange Sort
// ============================================================================

/// Exchange sort: swap `a[i]` with any later element smaller than it. O(n^2).
pub fn exchange_sort<T: Ord>(a: &mut [T]) {
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        for j in i + 1..n {
            if a[i] > a[j] {
                a.swap(i, j);
            }
        }
    }
}
