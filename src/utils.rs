// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing.

/// Case-fold a string for matching.
///
/// Plain Unicode lowercasing. Whitespace is left alone so that the phrase
/// bonus compares the query exactly as typed (minus surrounding blanks).
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Case-insensitive equality without allocating when both sides are ASCII.
pub fn eq_fold(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        a.eq_ignore_ascii_case(b)
    } else {
        a.to_lowercase() == b.to_lowercase()
    }
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// How many of `terms` occur in `haystack`. Duplicated terms count once each.
///
/// `haystack` must already be case-folded.
pub fn count_terms_in(haystack: &str, terms: &[String]) -> u32 {
    terms.iter().filter(|term| haystack.contains(term.as_str())).count() as u32
}
