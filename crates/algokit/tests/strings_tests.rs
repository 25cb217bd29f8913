//! Tests for naive string matching.
//!
//! ## Test Organization
//!
//! 1. **First Match** - Hits, misses, offsets
//! 2. **All Matches** - Multiple and overlapping occurrences
//! 3. **Edge Cases** - Empty pattern, oversized pattern, empty text

use algokit::prelude::*;

// ============================================================================
// First Match Tests
// ============================================================================

/// Test hits at the start, middle, and end of the text.
#[test]
fn test_find_first_positions() {
    assert_eq!(find_first("abcdef", "abc"), Some(0));
    assert_eq!(find_first("abcdef", "cde"), Some(2));
    assert_eq!(find_first("abcdef", "def"), Some(3));
    assert_eq!(find_first("abcdef", "f"), Some(5));
}

/// Test that absent patterns come back as `None`.
#[test]
fn test_find_first_miss() {
    assert_eq!(find_first("abcdef", "xyz"), None);
    assert_eq!(find_first("abcdef", "abd"), None);
    assert_eq!(find_first("aaab", "aab"), Some(1));
}

/// Test that the first of several occurrences wins.
#[test]
fn test_find_first_earliest() {
    assert_eq!(find_first("abab", "ab"), Some(0));
    assert_eq!(find_first("xxabxxab", "ab"), Some(2));
}

// ============================================================================
// All Matches Tests
// ============================================================================

/// Test multiple non-overlapping occurrences.
#[test]
fn test_find_all_multiple() {
    assert_eq!(find_all("abxabxab", "ab"), vec![0, 3, 6]);
    assert_eq!(find_all("abc", "z"), Vec::<usize>::new());
}

/// Test that overlapping occurrences are all reported.
#[test]
fn test_find_all_overlapping() {
    assert_eq!(find_all("aaaa", "aa"), vec![0, 1, 2]);
    assert_eq!(find_all("ababa", "aba"), vec![0, 2]);
}

// ============================================================================
// Edge Cases
// ============================================================================

/// Test the empty pattern: it matches at offset 0, and in `find_all` at
/// every offset including one past the last byte.
#[test]
fn test_empty_pattern() {
    assert_eq!(find_first("abc", ""), Some(0));
    assert_eq!(find_all("abc", ""), vec![0, 1, 2, 3]);
    assert_eq!(find_first("", ""), Some(0));
}

/// Test patterns longer than the text and empty text.
#[test]
fn test_oversized_pattern() {
    assert_eq!(find_first("ab", "abc"), None);
    assert_eq!(find_all("ab", "abc"), Vec::<usize>::new());
    assert_eq!(find_first("", "a"), None);
}

/// Test matching the whole text.
#[test]
fn test_whole_text_match() {
    assert_eq!(find_first("pattern", "pattern"), Some(0));
    assert_eq!(find_all("pattern", "pattern"), vec![0]);
}
