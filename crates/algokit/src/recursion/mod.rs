//! Recursion exercises: countdown, Tower of Hanoi, and permutation
//! generation.
//!
//! These routines emit their results through visitor closures rather than
//! printing, so callers decide whether to print, collect, or count.

pub mod countdown;
pub mod hanoi;
pub mod permutations;
