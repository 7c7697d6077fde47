// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A record's score is a sum of per-field contributions. Each search term is
//! checked independently against each field, so a two-word query that hits
//! the title twice earns twice the title weight.
//!
//! # Weights
//!
//! | Field        | Points                     | Counted per            |
//! |--------------|----------------------------|------------------------|
//! | Title        | 10                         | term                   |
//! | Title phrase | 20                         | record (at most once)  |
//! | Description  | 5                          | term                   |
//! | Tags         | 7                          | (tag, term) pair       |
//! | Topic        | 3                          | term                   |
//! | Content      | 1, capped at 10 in total   | (section, field, term) |
//!
//! The cap limits points only. A record whose sections hit fifty times still
//! reports `content` as matched, it just can't earn more than the cap for it.

use serde::{Deserialize, Serialize};

use crate::search::Query;
use crate::types::{ContentRecord, MatchedField, MatchedFields};
use crate::utils::{count_terms_in, fold_case};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Points per search term found in the title.
pub const TITLE_TERM_SCORE: u32 = 10;

/// Flat bonus when the title contains the whole query.
pub const TITLE_PHRASE_BONUS: u32 = 20;

/// Points per search term found in the description.
pub const DESCRIPTION_TERM_SCORE: u32 = 5;

/// Points per (tag, term) pair where the tag contains the term.
pub const TAG_TERM_SCORE: u32 = 7;

/// Points per search term found in the topic.
pub const TOPIC_TERM_SCORE: u32 = 3;

/// Upper bound on points from section titles and bodies.
pub const CONTENT_SCORE_CAP: u32 = 10;

/// Field weights used by the scorer.
///
/// `Default` yields the constants above. The CLI reads overrides from the
/// `[scoring]` table of `postsift.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub title_term: u32,
    pub title_phrase: u32,
    pub description_term: u32,
    pub tag_term: u32,
    pub topic_term: u32,
    pub content_cap: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            title_term: TITLE_TERM_SCORE,
            title_phrase: TITLE_PHRASE_BONUS,
            description_term: DESCRIPTION_TERM_SCORE,
            tag_term: TAG_TERM_SCORE,
            topic_term: TOPIC_TERM_SCORE,
            content_cap: CONTENT_SCORE_CAP,
        }
    }
}

/// Score and matched fields for one record against one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordScore {
    pub score: u32,
    pub matched_fields: MatchedFields,
}

impl RecordScore {
    fn add(&mut self, field: MatchedField, points: u32) {
        if points > 0 {
            self.score = self.score.saturating_add(points);
            self.matched_fields.insert(field);
        }
    }

    pub fn is_match(&self) -> bool {
        self.score > 0
    }
}

/// Score a single record.
///
/// Pure function of its inputs. Absent `topic` and `sections` contribute
/// nothing. Fields are only marked matched when they add a nonzero amount, so
/// a weight configured to zero never shows up in `matched_fields`.
pub fn score_record(record: &ContentRecord, query: &Query, weights: &ScoringWeights) -> RecordScore {
    let terms = query.terms();
    let mut result = RecordScore::default();

    let title = fold_case(&record.title);
    result.add(
        MatchedField::Title,
        count_terms_in(&title, terms).saturating_mul(weights.title_term),
    );
    if title.contains(query.phrase()) {
        result.add(MatchedField::Title, weights.title_phrase);
    }

    let description = fold_case(&record.description);
    result.add(
        MatchedField::Description,
        count_terms_in(&description, terms).saturating_mul(weights.description_term),
    );

    let tag_hits: u32 = record
        .tags
        .iter()
        .map(|tag| count_terms_in(&fold_case(tag), terms))
        .sum();
    result.add(MatchedField::Tags, tag_hits.saturating_mul(weights.tag_term));

    if let Some(topic) = &record.topic {
        let topic = fold_case(topic);
        result.add(
            MatchedField::Topic,
            count_terms_in(&topic, terms).saturating_mul(weights.topic_term),
        );
    }

    let content_hits = content_hits(record, terms);
    if content_hits > 0 && weights.content_cap > 0 {
        result.add(MatchedField::Content, content_hits.min(weights.content_cap));
    }

    result
}

/// Raw (uncapped) count of section hits: one per term per field per section.
pub fn content_hits(record: &ContentRecord, terms: &[String]) -> u32 {
    record
        .sections()
        .map(|section| {
            let in_title = section
                .title
                .as_deref()
                .map_or(0, |t| count_terms_in(&fold_case(t), terms));
            let in_content = section
                .content
                .as_deref()
                .map_or(0, |c| count_terms_in(&fold_case(c), terms));
            in_title + in_content
        })
        .fold(0u32, u32::saturating_add)
}
