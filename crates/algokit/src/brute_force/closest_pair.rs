//! Brute-force closest pair of points.
//!
//! ## Purpose
//!
//! This module finds the closest pair among a set of 2D points by examining
//! all O(n^2) unordered pairs.
//!
//! ## Design notes
//!
//! * **Generics**: Points are `(T, T)` with `T: num_traits::Float`.
//! * **Seeding**: The running minimum is seeded with the first pair, so no
//!   infinity sentinel is needed and the result indices are always valid.
//!
//! ## Invariants
//!
//! * The returned indices satisfy `i < j`.
//! * No pair of input points is strictly closer than the returned distance.
//!
//! ## Edge cases
//!
//! * Fewer than two points is `TooFewPoints`.
//! * Coincident points yield distance zero.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::AlgokitError;

// ============================================================================
// Distance
// ============================================================================

/// Euclidean distance between two points.
pub fn distance<T: Float>(p: (T, T), q: (T, T)) -> T {
    ((p.0 - q.0).powi(2) + (p.1 - q.1).powi(2)).sqrt()
}

// ============================================================================
// Result Structure
// ============================================================================

/// The closest pair found: indices into the input and their distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPair<T> {
    /// Index of the first point of the pair (`i < j`).
    pub i: usize,

    /// Index of the second point of the pair.
    pub j: usize,

    /// Euclidean distance between the two points.
    pub distance: T,
}

// ============================================================================
// Closest Pair
// ============================================================================

/// Find the closest pair by examining all unordered pairs. O(n^2).
pub fn closest_pair<T: Float>(points: &[(T, T)]) -> Result<ClosestPair<T>, AlgokitError> {
    if points.len() < 2 {
        return Err(AlgokitError::TooFewPoints {
            got: points.len(),
            min: 2,
        });
    }

    let mut best = ClosestPair {
        i: 0,
        j: 1,
        distance: distance(points[0], points[1]),
    };
    for i in 0..points.len() - 1 {
        for j in i + 1..points.len() {
            let d = distance(points[i], points[j]);
            if d < best.distance {
                best = ClosestPair { i, j, distance: d };
            }
        }
    }
    Ok(best)
}
