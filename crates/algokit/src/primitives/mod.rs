//! Shared primitives for the algorithm families.

pub mod errors;
