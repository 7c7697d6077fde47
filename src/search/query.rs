// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing.
//!
//! A query is parsed once per search call into its case-folded phrase and its
//! whitespace-separated terms. Blank input has no `Query` at all, which is how
//! `search` short-circuits to an empty result.

use crate::utils::fold_case;

/// A parsed, non-empty search query.
///
/// **Invariant**: `terms` is non-empty and no term is empty or contains
/// whitespace. `phrase` is the case-folded query exactly as typed, surrounding
/// whitespace included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    phrase: String,
    terms: Vec<String>,
}

impl Query {
    /// Parse raw user input. Returns `None` for empty or whitespace-only input.
    ///
    /// Repeated words stay repeated: `"ai ai"` has two terms and scores each.
    /// Trimming only decides blankness. Padding stays in the phrase, so
    /// `" render farm "` earns no phrase bonus against "Render Farm Basics".
    ///
    /// # Example
    ///
    /// ```
    /// use postsift::Query;
    ///
    /// let query = Query::parse("  3D Rendering ").unwrap();
    /// assert_eq!(query.phrase(), "  3d rendering ");
    /// assert_eq!(query.terms(), ["3d", "rendering"]);
    /// assert!(Query::parse("   ").is_none());
    /// ```
    pub fn parse(input: &str) -> Option<Self> {
        if input.trim().is_empty() {
            return None;
        }
        let phrase = fold_case(input);
        let terms = phrase.split_whitespace().map(str::to_string).collect();
        Some(Self { phrase, terms })
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
