//! Naive pattern matching.

pub mod matching;
