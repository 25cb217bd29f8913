//! Error types for trial harness operations.
//!
//! ## Purpose
//!
//! This module defines the failure conditions of a trial: builder misuse,
//! undersized inputs, cross-check mismatches, and errors surfaced by the
//! algorithm under trial.
//!
//! ## Design notes
//!
//! * **Contextual**: Mismatches carry the trial name and a human-readable
//!   detail of what differed.
//! * **Trait Implementation**: Implements `Display`, `std::error::Error`,
//!   and `From<AlgokitError>` for `?` propagation out of trial closures.
//!
//! ## Non-goals
//!
//! * This module does not perform the cross-checks themselves.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use algokit::primitives::errors::AlgokitError;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for trial harness operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabError {
    /// The configured element count is below the trial's minimum.
    InvalidElements {
        /// The element count provided.
        got: usize,
        /// Minimum required for this trial kind.
        min: usize,
    },

    /// A builder parameter was set multiple times.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The algorithm's output disagreed with the reference computation.
    Mismatch {
        /// Name of the failing trial.
        trial: String,
        /// What differed, with the offending values.
        detail: String,
    },

    /// The algorithm under trial returned an error.
    Algorithm(AlgokitError),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidElements { got, min } => {
                write!(f, "Invalid element count: {got} (must be at least {min})")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::Mismatch { trial, detail } => {
                write!(f, "Trial '{trial}' failed its cross-check: {detail}")
            }
            Self::Algorithm(e) => write!(f, "Algorithm error: {e}"),
        }
    }
}

// ============================================================================
// Standard Error Trait and Conversions
// ============================================================================

impl Error for LabError {}

impl From<AlgokitError> for LabError {
    fn from(e: AlgokitError) -> Self {
        Self::Algorithm(e)
    }
}
