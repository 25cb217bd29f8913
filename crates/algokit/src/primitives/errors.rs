//! Error types for algokit operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur across the
//! algorithm families: empty or undersized inputs, inputs past a documented
//! size cap, and arithmetic overflow.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., actual vs.
//!   minimum lengths).
//! * **No-std**: All variants are payload-only; no heap allocation is needed
//!   to construct or format them.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Invariants
//!
//! * Every variant provides sufficient context to reproduce the failure.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide recovery or fallback strategies.

#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for algokit operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgokitError {
    /// The operation requires a non-empty input.
    EmptyInput,

    /// The input has fewer elements than the operation requires.
    TooFewPoints {
        /// Number of elements provided.
        got: usize,
        /// Minimum required elements.
        min: usize,
    },

    /// The input exceeds the documented cap for an exhaustive operation.
    TooManyElements {
        /// Number of elements provided.
        got: usize,
        /// Maximum supported elements.
        max: usize,
    },

    /// The disk count exceeds what a `u64` move counter can represent.
    TooManyDisks {
        /// Number of disks requested.
        got: u32,
        /// Maximum supported disks.
        max: u32,
    },

    /// Integer exponentiation overflowed the result type.
    Overflow {
        /// The base being raised.
        base: u64,
        /// The exponent that overflowed.
        exponent: u32,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for AlgokitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input is empty"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few elements: got {got}, need at least {min}")
            }
            Self::TooManyElements { got, max } => {
                write!(f, "Too many elements: got {got}, supported maximum is {max}")
            }
            Self::TooManyDisks { got, max } => {
                write!(f, "Too many disks: got {got}, supported maximum is {max}")
            }
            Self::Overflow { base, exponent } => {
                write!(f, "Overflow computing {base}^{exponent}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for AlgokitError {}
