//! Exhaustive geometry and array scans.
//!
//! Deliberately brute-force formulations: every candidate is examined, and
//! the asymptotics (quadratic and cubic) are part of the exercise.

pub mod closest_pair;
pub mod max_subarray;
pub mod runs;
