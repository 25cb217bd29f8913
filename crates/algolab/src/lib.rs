//! # Algolab — Self-Checking Trial Harness for Algokit
//!
//! The trial harness behind the `algokit` algorithm collection. A trial
//! generates seeded random input, runs an algorithm under wall-clock timing,
//! cross-checks the output against a trusted reference implementation, and
//! reports the result. Reports collect into a table from which the fastest
//! algorithm can be read off.
//!
//! ## Quick Start
//!
//! ```rust
//! use algokit::prelude::*;
//! use algolab::prelude::*;
//!
//! let mut results = TrialSet::new();
//!
//! results.push(
//!     Trial::new("insertion_sort")
//!         .elements(2_000)
//!         .seed(42)
//!         .run_sort(|a| insertion_sort(a))?,
//! );
//! results.push(
//!     Trial::new("selection_sort")
//!         .elements(2_000)
//!         .seed(42)
//!         .run_sort(|a| selection_sort(a))?,
//! );
//!
//! println!("{results}");
//! if let Some(best) = results.fastest() {
//!     println!("Fastest: {best}");
//! }
//! # Result::<(), LabError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every `run_*` method returns `Result<TrialReport, LabError>`. A
//! cross-check failure is an error, not a report: a trial that produced a
//! wrong answer has no meaningful timing.
//!
//! ```rust
//! use algolab::prelude::*;
//!
//! // A "sort" that does nothing fails the cross-check.
//! let outcome = Trial::new("broken").elements(100).run_sort(|_| {});
//! assert!(matches!(outcome, Err(LabError::Mismatch { .. })));
//! ```

// Layer 1: Errors - harness failure conditions.
pub mod errors;

// Layer 2: Generate - seeded random input generation.
pub mod generate;

// Layer 3: Oracle - trusted reference computations.
pub mod oracle;

// Layer 4: Report - per-trial reports and the summary table.
pub mod report;

// Layer 5: Trial - the fluent trial builder and runners.
pub mod trial;

// Standard algolab prelude.
pub mod prelude {
    pub use crate::errors::LabError;
    pub use crate::report::{TrialReport, TrialSet};
    pub use crate::trial::Trial;
}
