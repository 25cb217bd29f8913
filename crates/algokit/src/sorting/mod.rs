//! In-place elementary sorts.
//!
//! All sorts operate on `&mut [T]` with `T: Ord`, run in O(n^2) time, and
//! are kept in their textbook forms. Empty and single-element slices are
//! no-ops for every variant.

pub mod bubble;
pub mod exchange;
pub mod insertion;
pub mod selection;
