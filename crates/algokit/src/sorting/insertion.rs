//! Insertion sort: shift-based, swap-based, and recursive.
//!
//! ## Purpose
//!
//! This module provides the three classic formulations of insertion sort.
//! All are O(n^2) worst case and O(n) on already-sorted input.
//!
//! ## Key concepts
//!
//! * **Shift vs. swap**: The shift formulation finds the insertion position
//!   first and moves the element once (`rotate_right`); the swap formulation
//!   bubbles the element down with adjacent swaps.
//! * **Recursive formulation**: The recursion advances the insertion index,
//!   one recursive call per element. Recursion depth equals the slice length.
//!
//! ## Invariants
//!
//! * All variants are stable: equal elements keep their relative order.

// ============================================================================
// Shift-Based Insertion Sort
// ============================================================================

/// Insertion sort that locates the insertion point, then shifts the prefix
/// with a single rotation. O(n^2).
pub fn insertion_sort<T: Ord>(a: &mut [T]) {
    for i in 1..a.len() {
        let mut pos = i;
        while pos > 0 && a[pos - 1] > a[i] {
            pos -= 1;
        }
        a[pos..=i].rotate_right(1);
    }
}

// ============================================================================
// Swap-Based Insertion Sort
// ============================================================================

/// Insertion sort that bubbles each element down with adjacent swaps. O(n^2).
pub fn insertion_sort_swapping<T: Ord>(a: &mut [T]) {
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && a[j] < a[j - 1] {
            a.swap(j, j - 1);
            j -= 1;
        }
    }
}

// ============================================================================
// Recursive Insertion Sort
// ============================================================================

/// Insertion sort driven by recursion over the insertion index. O(n^2) time,
/// recursion depth equal to the slice length.
pub fn insertion_sort_recursive<T: Ord>(a: &mut [T]) {
    if !a.is_empty() {
        insert_from(a, 0);
    }
}

/// Insert `a[k]` into the sorted prefix, then recurse on `k + 1`.
fn insert_from<T: Ord>(a: &mut [T], k: usize) {
    let mut j = k;
    while j > 0 && a[j] < a[j - 1] {
        a.swap(j, j - 1);
        j -= 1;
    }
    if k + 1 < a.len() {
        insert_from(a, k + 1);
    }
}
