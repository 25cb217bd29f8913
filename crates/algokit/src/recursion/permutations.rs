//! Permutation generation.
//!
//! ## Purpose
//!
//! This module provides the two classic recursive permutation generators:
//! building all permutations of `1..=n` by inserting each new element into
//! every position of the smaller permutations, and visiting every
//! arrangement of a slice in place via swaps. Both are O(n!).
//!
//! ## Key concepts
//!
//! * **Insertion generation**: The permutations of `1..=n` are obtained by
//!   inserting `n` into each of the `n` possible positions of every
//!   permutation of `1..=n-1`.
//! * **Swap recursion**: `for_each_permutation` fixes one position per
//!   recursion level by swapping each candidate into it, and restores the
//!   swap on the way back out.
//!
//! ## Invariants
//!
//! * `permutations_by_insertion(n)` yields exactly `n!` distinct
//!   permutations.
//! * `for_each_permutation` visits exactly `n!` arrangements and leaves the
//!   slice in its original order.
//!
//! ## Edge cases
//!
//! * `n == 0` yields a single empty permutation; an empty slice is visited
//!   once.
//! * Counts past [`MAX_ELEMENTS`] would allocate `n!` vectors and are
//!   rejected up front.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::AlgokitError;

// ============================================================================
// Constants
// ============================================================================

/// Largest `n` accepted by [`permutations_by_insertion`]; 10! is ~3.6M
/// vectors, which is the upper end of what a pedagogical run should hold.
pub const MAX_ELEMENTS: usize = 10;

// ============================================================================
// Insertion-Based Generation
// ============================================================================

/// Materialize all permutations of `1..=n` by recursive insertion. O(n!)
/// time and space.
pub fn permutations_by_insertion(n: usize) -> Result<Vec<Vec<usize>>, AlgokitError> {
    if n > MAX_ELEMENTS {
        return Err(AlgokitError::TooManyElements {
            got: n,
            max: MAX_ELEMENTS,
        });
    }
    if n == 0 {
        return Ok(vec![Vec::new()]);
    }
    Ok(generate(n))
}

/// Permutations of `1..=n`, built from the permutations of `1..=n-1`.
fn generate(n: usize) -> Vec<Vec<usize>> {
    if n == 1 {
        return vec![vec![1]];
    }
    let smaller = generate(n - 1);
    let mut all = Vec::with_capacity(smaller.len() * n);
    for p in &smaller {
        // Insert n into every position of p, including both ends.
        for i in 0..=p.len() {
            let mut q = Vec::with_capacity(p.len() + 1);
            q.extend_from_slice(&p[..i]);
            q.push(n);
            q.extend_from_slice(&p[i..]);
            all.push(q);
        }
    }
    all
}

// ============================================================================
// In-Place Swap Recursion
// ============================================================================

/// Visit every arrangement of `items` via the swap recursion. O(n!) visits;
/// the slice is restored to its original order before returning.
pub fn for_each_permutation<T, F: FnMut(&[T])>(items: &mut [T], visit: &mut F) {
    permute(items, 0, visit);
}

/// Fix position `k` by swapping each candidate into it, recurse, undo.
fn permute<T, F: FnMut(&[T])>(a: &mut [T], k: usize, visit: &mut F) {
    if k + 1 >= a.len() {
        visit(a);
        return;
    }
    for i in k..a.len() {
        a.swap(k, i);
        permute(a, k + 1, visit);
        a.swap(k, i);
    }
}
