//! Tower of Hanoi.
//!
//! ## Purpose
//!
//! This module provides the classic recursive Tower of Hanoi solution: move
//! `n` disks from a source peg to a destination peg via an auxiliary peg,
//! never placing a larger disk on a smaller one. O(2^n) moves.
//!
//! ## Key concepts
//!
//! * **Recursive decomposition**: Move `n - 1` disks out of the way, move
//!   the largest disk, move the `n - 1` disks back on top.
//! * **Visitor**: Each move is emitted through a closure in execution order;
//!   disks are numbered 1 (smallest) to `n` (largest).
//!
//! ## Invariants
//!
//! * `solve` emits exactly `move_count(disks)` moves.
//! * The emitted sequence is a legal solution: replaying it never stacks a
//!   larger disk on a smaller one.
//!
//! ## Edge cases
//!
//! * Zero disks emit nothing.
//! * More than [`MAX_DISKS`] disks would overflow the `u64` move counter and
//!   is rejected up front.

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::AlgokitError;

// ============================================================================
// Constants
// ============================================================================

/// Largest disk count whose `2^n - 1` move total fits in a `u64`.
pub const MAX_DISKS: u32 = 63;

// ============================================================================
// Move Type
// ============================================================================

/// A single disk movement between pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Disk being moved, numbered 1 (smallest) to `n` (largest).
    pub disk: u32,

    /// Peg the disk leaves.
    pub from: u8,

    /// Peg the disk lands on.
    pub to: u8,
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Move disk {} from {} to {}", self.disk, self.from, self.to)
    }
}

// ============================================================================
// Solution
// ============================================================================

/// Total number of moves required for `disks` disks: `2^n - 1`.
pub fn move_count(disks: u32) -> Result<u64, AlgokitError> {
    if disks > MAX_DISKS {
        return Err(AlgokitError::TooManyDisks {
            got: disks,
            max: MAX_DISKS,
        });
    }
    Ok((1u64 << disks) - 1)
}

/// Emit the move sequence transferring `disks` disks from `from` to `to`
/// via `via`. O(2^n) moves, recursion depth equal to `disks`.
pub fn solve<F: FnMut(Move)>(
    disks: u32,
    from: u8,
    to: u8,
    via: u8,
    visit: &mut F,
) -> Result<(), AlgokitError> {
    if disks > MAX_DISKS {
        return Err(AlgokitError::TooManyDisks {
            got: disks,
            max: MAX_DISKS,
        });
    }
    transfer(disks, from, to, via, visit);
    Ok(())
}

/// The recursive decomposition proper.
fn transfer<F: FnMut(Move)>(disks: u32, from: u8, to: u8, via: u8, visit: &mut F) {
    if disks == 0 {
        return;
    }
    transfer(disks - 1, from, via, to, visit);
    visit(Move {
        disk: disks,
        from,
        to,
    });
    transfer(disks - 1, via, to, from, visit);
}
