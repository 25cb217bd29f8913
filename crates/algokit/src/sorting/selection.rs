//! Selection sort, iterative and recursive.
//!
//! ## Purpose
//!
//! This module provides selection sort: repeatedly select the minimum of the
//! unsorted suffix and swap it into place. Exactly n - 1 swaps, O(n^2)
//! comparisons regardless of input order.
//!
//! ## Key concepts
//!
//! * **Recursive formulation**: The recursion advances the boundary of the
//!   sorted prefix, one recursive call per element.

// ============================================================================
// Iterative Selection Sort
// ============================================================================

/// Selection sort. O(n^2) comparisons, at most n - 1 swaps.
pub fn selection_sort<T: Ord>(a: &mut [T]) {
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if a[j] < a[min_idx] {
                min_idx = j;
            }
        }
        a.swap(i, min_idx);
    }
}

// ============================================================================
// Recursive Selection Sort
// ============================================================================

/// Selection sort driven by recursion over the sorted-prefix boundary.
/// O(n^2) time, recursion depth equal to the slice length.
pub fn selection_sort_recursive<T: Ord>(a: &mut [T]) {
    if !a.is_empty() {
        select_from(a, 0);
    }
}

/// Swap the minimum of `a[k..]` into position `k`, then recurse on `k + 1`.
fn select_from<T: Ord>(a: &mut [T], k: usize) {
    if k + 1 >= a.len() {
        return;
    }
    let mut min_idx = k;
    for i in k + 1..a.len() {
        if a[i] < a[min_idx] {
            min_idx = i;
        }
    }
    a.swap(k, min_idx);
    select_from(a, k + 1);
}
