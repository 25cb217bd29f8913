//! Binary search over sorted slices.
//!
//! ## Purpose
//!
//! This module provides both formulations of binary search: the iterative
//! halving loop, and the recursive variant that narrows an inclusive
//! `[left, right]` index range. Both are O(log n).
//!
//! ## Key concepts
//!
//! * **Recursive bounds**: The recursive variant bottoms out on a
//!   single-element range (`left == right`), mirroring the classic
//!   formulation taught alongside the other recursion exercises.
//!
//! ## Invariants
//!
//! * The input must be sorted in ascending order; on unsorted input the
//!   result is unspecified (but neither variant panics).

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Iterative Binary Search
// ============================================================================

/// Search a sorted slice for `key` by iterative halving. O(log n).
pub fn binary_search<T: Ord>(a: &[T], key: &T) -> Option<usize> {
    if a.is_empty() {
        return None;
    }

    let (mut left, mut right) = (0, a.len() - 1);
    while left <= right {
        let mid = (left + right) / 2;
        match a[mid].cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            }
        }
    }
    None
}

// ============================================================================
// Recursive Binary Search
// ============================================================================

/// Search a sorted slice for `key` by recursive range narrowing. O(log n).
pub fn binary_search_recursive<T: Ord>(a: &[T], key: &T) -> Option<usize> {
    if a.is_empty() {
        return None;
    }
    search(a, 0, a.len() - 1, key)
}

/// Narrow the inclusive range `[left, right]` until a single element remains.
fn search<T: Ord>(a: &[T], left: usize, right: usize, key: &T) -> Option<usize> {
    if left == right {
        return if a[left] == *key { Some(left) } else { None };
    }

    let mid = (left + right) / 2;
    match a[mid].cmp(key) {
        Ordering::Equal => Some(mid),
        Ordering::Less => search(a, mid + 1, right, key),
        Ordering::Greater => {
            // The lower half [left, mid - 1] is empty when mid == left.
            if mid == left {
                None
            } else {
                search(a, left, mid - 1, key)
            }
        }
    }
}
