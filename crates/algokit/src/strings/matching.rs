//! Naive string matching.
//!
//! ## Purpose
//!
//! This module provides the naive O(nm) pattern scan: at each candidate
//! offset, compare the pattern character by character until it matches or
//! mismatches.
//!
//! ## Design notes
//!
//! * **Byte-oriented**: Matching compares bytes; offsets are byte offsets.
//!   Trial data is ASCII, where byte and character offsets coincide.
//!
//! ## Edge cases
//!
//! * An empty pattern matches at offset 0 (and at every offset in
//!   `find_all`, including one past the last byte).
//! * A pattern longer than the text never matches.
//! * `find_all` reports overlapping matches.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// First Match
// ============================================================================

/// Find the first occurrence of `pattern` in `text`. O(nm).
pub fn find_first(text: &str, pattern: &str) -> Option<usize> {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    if p.len() > t.len() {
        return None;
    }

    for k in 0..=t.len() - p.len() {
        let mut j = 0;
        while j < p.len() && p[j] == t[k + j] {
            j += 1;
        }
        if j == p.len() {
            return Some(k);
        }
    }
    None
}

// ============================================================================
// All Matches
// ============================================================================

/// Find every occurrence of `pattern` in `text`, overlapping included.
/// O(nm).
pub fn find_all(text: &str, pattern: &str) -> Vec<usize> {
    let t = text.as_bytes();
    let p = pattern.as_bytes();
    let mut matches = Vec::new();
    if p.len() > t.len() {
        return matches;
    }

    for k in 0..=t.len() - p.len() {
        let mut j = 0;
        while j < p.len() && p[j] == t[k + j] {
            j += 1;
        }
        if j == p.len() {
            matches.push(k);
        }
    }
    matches
}
