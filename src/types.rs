// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a content search.
//!
//! Records come in, scored results go out. Everything here is plain data with
//! serde derives so the same types travel through content files, the CLI's
//! `--json` output and the library API without translation layers.
//!
//! # Invariants
//!
//! - **ScoredResult**: `score > 0`. Zero-score records never make it out of
//!   `search`.
//! - **ScoredResult**: `matched_fields` names exactly the fields that added
//!   points. A field that was looked at but contributed nothing is absent.
//! - **ContentRecord**: `topic` and `sections` are `Option`s. Absence is an
//!   explicit state, not an empty string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// INPUT TYPES
// =============================================================================

/// One blog post, guide or page eligible for search.
///
/// `title` and `description` default to empty strings when missing from the
/// source JSON. An empty field contains no search term, so a malformed record
/// degrades to "scores zero there" instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub slug: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl ContentRecord {
    /// Iterate over sections, treating `None` as no sections.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().flatten()
    }
}

/// Free-form extra text attached to a record (headings and body fragments).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Section {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

// =============================================================================
// OUTPUT TYPES
// =============================================================================

/// A record field that can contribute to a score.
///
/// Declaration order doubles as display order: `BTreeSet<MatchedField>`
/// iterates title first, content last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchedField {
    Title,
    Description,
    Tags,
    Topic,
    Content,
}

impl MatchedField {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchedField::Title => "title",
            MatchedField::Description => "description",
            MatchedField::Tags => "tags",
            MatchedField::Topic => "topic",
            MatchedField::Content => "content",
        }
    }
}

impl fmt::Display for MatchedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of fields that contributed to a score. Each field appears at most once.
pub type MatchedFields = BTreeSet<MatchedField>;

/// A record that matched a query, with its score.
///
/// Serializes flat: the record's own fields sit next to `score` and
/// `matchedFields`, which is what the site's search UI consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: ContentRecord,
    pub score: u32,
    pub matched_fields: MatchedFields,
}

impl ScoredResult {
    pub fn slug(&self) -> &str {
        &self.record.slug
    }

    pub fn matched(&self, field: MatchedField) -> bool {
        self.matched_fields.contains(&field)
    }
}

/// A ranked hit that points back into the input slice instead of cloning it.
///
/// `index` is the record's position in the slice passed to `rank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub index: usize,
    pub score: u32,
    pub matched_fields: MatchedFields,
}

/// A tag or topic name with the number of records carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub name: String,
    pub count: usize,
}
