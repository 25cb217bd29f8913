//! # Algokit — Classic Algorithms in Their Textbook Forms
//!
//! A pedagogical collection of classic algorithms: elementary searching and
//! sorting routines, recursion exercises (GCD, Tower of Hanoi, permutation
//! generation, polynomial evaluation), brute-force geometry and array scans,
//! and naive string matching.
//!
//! Every function is independent, deterministic given its inputs, and kept
//! deliberately close to its textbook formulation. The crate favors clarity
//! over asymptotic cleverness: the quadratic sorts stay quadratic, and the
//! brute-force scans stay brute force. The companion `algolab` crate provides
//! the trial harness that generates random input, times execution, and
//! cross-checks results against trusted reference implementations.
//!
//! ## Quick Start
//!
//! ```rust
//! use algokit::prelude::*;
//!
//! let mut data = vec![5, 3, 8, 1, 9, 2];
//! insertion_sort(&mut data);
//! assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
//!
//! let found = binary_search(&data, &8);
//! assert_eq!(found, Some(4));
//!
//! assert_eq!(gcd(48, 36), 12);
//! ```
//!
//! ### Recursion Exercises
//!
//! The recursion exercises emit their results through visitor closures, so
//! callers decide whether to print, collect, or count:
//!
//! ```rust
//! use algokit::recursion::hanoi;
//!
//! let mut moves = Vec::new();
//! hanoi::solve(3, 0, 2, 1, &mut |m| moves.push(m))?;
//! assert_eq!(moves.len() as u64, hanoi::move_count(3)?);
//! # Result::<(), algokit::primitives::errors::AlgokitError>::Ok(())
//! ```
//!
//! ### Error Handling
//!
//! Operations with preconditions return `Result<_, AlgokitError>`:
//!
//! ```rust
//! use algokit::prelude::*;
//!
//! let pair = closest_pair(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)])?;
//! assert_eq!((pair.i, pair.j), (0, 2));
//!
//! let too_few = closest_pair::<f64>(&[(0.0, 0.0)]);
//! assert!(too_few.is_err());
//! # Result::<(), AlgokitError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments. Disable default features and
//! enable `libm` for floating-point math:
//!
//! ```toml
//! [dependencies]
//! algokit = { version = "0.1", default-features = false, features = ["libm"] }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types shared across the algorithm families.
pub mod primitives;

// Layer 2: Searching - lookup routines over slices.
pub mod searching;

// Layer 3: Sorting - in-place elementary sorts.
pub mod sorting;

// Layer 4: Numerical - GCD, exponentiation, polynomial evaluation.
pub mod numerical;

// Layer 5: Recursion - countdown, Tower of Hanoi, permutation generation.
pub mod recursion;

// Layer 6: Brute force - exhaustive geometry and array scans.
pub mod brute_force;

// Layer 7: Strings - naive pattern matching.
pub mod strings;

// Standard algokit prelude.
pub mod prelude {
    pub use crate::brute_force::closest_pair::{closest_pair, distance, ClosestPair};
    pub use crate::brute_force::max_subarray::{
        max_subarray_cubic, max_subarray_quadratic, range_sum, MaxSubarray,
    };
    pub use crate::brute_force::runs::{longest_ascending_run, AscendingRun};
    pub use crate::numerical::gcd::gcd;
    pub use crate::numerical::polynomial::{
        evaluate_cached_power, evaluate_horner, evaluate_terms,
    };
    pub use crate::numerical::power::{fast_power, power};
    pub use crate::primitives::errors::AlgokitError;
    pub use crate::recursion::countdown::countdown;
    pub use crate::recursion::hanoi;
    pub use crate::recursion::permutations::{for_each_permutation, permutations_by_insertion};
    pub use crate::searching::binary::{binary_search, binary_search_recursive};
    pub use crate::searching::jump::jump_search;
    pub use crate::searching::linear::{linear_search, sentinel_search};
    pub use crate::sorting::bubble::{bubble_sort, bubble_sort_backward};
    pub use crate::sorting::exchange::exchange_sort;
    pub use crate::sorting::insertion::{
        insertion_sort, insertion_sort_recursive, insertion_sort_swapping,
    };
    pub use crate::sorting::selection::{selection_sort, selection_sort_recursive};
    pub use crate::strings::matching::{find_all, find_first};
}
