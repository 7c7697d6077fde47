// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: score every record, keep the positive ones, rank them.
//!
//! There is no prebuilt index. Records are supplied fresh on every call and
//! nothing survives between calls, so every function here is pure and safe to
//! call from as many threads as you like.
//!
//! `rank` is the workhorse and returns positions into the input slice.
//! `search` and friends clone the matched records into `ScoredResult`s for
//! callers that want owned output.

mod query;

pub use query::Query;

use tracing::debug;

use crate::scoring::ranking::sort_hits;
use crate::scoring::{score_record, ScoringWeights};
use crate::types::{ContentRecord, Hit, ScoredResult};

/// Rank records against a query with the default weights.
pub fn rank(records: &[ContentRecord], query: &str) -> Vec<Hit> {
    rank_with_weights(records, query, &ScoringWeights::default())
}

/// Rank records against a query.
///
/// Returns hits with `score > 0`, sorted by score descending and then by input
/// position. A blank query returns nothing without touching the records.
pub fn rank_with_weights(
    records: &[ContentRecord],
    query: &str,
    weights: &ScoringWeights,
) -> Vec<Hit> {
    let Some(query) = Query::parse(query) else {
        return Vec::new();
    };

    let mut hits: Vec<Hit> = records
        .iter()
        .enumerate()
        .filter_map(|(index, record)| score_hit(index, record, &query, weights))
        .collect();

    sort_hits(&mut hits);
    debug!(
        query = query.phrase(),
        records = records.len(),
        hits = hits.len(),
        "ranked records"
    );
    hits
}

/// Search records with the default weights.
///
/// # Example
///
/// ```
/// use postsift::{search, ContentRecord};
///
/// let records = vec![
///     ContentRecord {
///         slug: "intro".into(),
///         title: "Intro to path tracing".into(),
///         description: "Light transport basics".into(),
///         ..Default::default()
///     },
///     ContentRecord {
///         slug: "gpu".into(),
///         title: "GPU farms".into(),
///         description: "Scaling path tracing in the cloud".into(),
///         ..Default::default()
///     },
/// ];
///
/// let results = search(&records, "path tracing");
/// assert_eq!(results[0].slug(), "intro");
/// assert_eq!(results[1].slug(), "gpu");
/// assert!(search(&records, "   ").is_empty());
/// ```
pub fn search(records: &[ContentRecord], query: &str) -> Vec<ScoredResult> {
    search_with_weights(records, query, &ScoringWeights::default())
}

/// Search records with explicit weights.
pub fn search_with_weights(
    records: &[ContentRecord],
    query: &str,
    weights: &ScoringWeights,
) -> Vec<ScoredResult> {
    into_results(records, rank_with_weights(records, query, weights))
}

/// Data-parallel search. Same output as `search_with_weights`, scored with rayon.
///
/// Worth it for large catalogues with long sections. For a typical blog the
/// sequential path is already well under a millisecond.
#[cfg(feature = "parallel")]
pub fn search_parallel(
    records: &[ContentRecord],
    query: &str,
    weights: &ScoringWeights,
) -> Vec<ScoredResult> {
    use rayon::prelude::*;

    let Some(parsed) = Query::parse(query) else {
        return Vec::new();
    };

    let mut hits: Vec<Hit> = records
        .par_iter()
        .enumerate()
        .filter_map(|(index, record)| score_hit(index, record, &parsed, weights))
        .collect();

    sort_hits(&mut hits);
    into_results(records, hits)
}

fn score_hit(
    index: usize,
    record: &ContentRecord,
    query: &Query,
    weights: &ScoringWeights,
) -> Option<Hit> {
    let scored = score_record(record, query, weights);
    scored.is_match().then(|| Hit {
        index,
        score: scored.score,
        matched_fields: scored.matched_fields,
    })
}

fn into_results(records: &[ContentRecord], hits: Vec<Hit>) -> Vec<ScoredResult> {
    hits.into_iter()
        .map(|hit| ScoredResult {
            record: records[hit.index].clone(),
            score: hit.score,
            matched_fields: hit.matched_fields,
        })
        .collect()
}
