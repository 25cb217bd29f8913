//! Bubble sort, forward and backward scans.
//!
//! ## Purpose
//!
//! This module provides bubble sort in its two scan directions: the forward
//! scan that floats the largest remaining element to the end of each pass,
//! and the backward scan that sinks the smallest remaining element to the
//! front. Both are O(n^2).

// ============================================================================
// Forward Bubble Sort
// ============================================================================

/// Bubble sort with a forward scan; each pass floats the largest remaining
/// element to the end. O(n^2).
pub fn bubble_sort<T: Ord>(a: &mut [T]) {
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
            }
        }
    }
}

// ============================================================================
// Backward Bubble Sort
// ============================================================================

/// Bubble sort with a backward scan; each pass sinks the smallest remaining
/// element to the front. O(n^2).
pub fn bubble_sort_backward<T: Ord>(a: &mut [T]) {
    let n = a.len();
    for i in 1..n {
        for j in (i..n).rev() {
            if a[j] < a[j - 1] {
                a.swap(j, j - 1);
            }
        }
    }
}
