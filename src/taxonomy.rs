// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tags and topics: filtering and frequency tables.
//!
//! Filters compare case-insensitively, so `/tags/AI` and `/tags/ai` list the
//! same posts. Frequency tables count the names exactly as written.

use std::collections::HashMap;

use crate::scoring::ranking::compare_counts;
use crate::types::{ContentRecord, TermCount};
use crate::utils::eq_fold;

/// Records carrying `tag` (case-insensitive exact match), in input order.
pub fn filter_by_tag<'a>(records: &'a [ContentRecord], tag: &str) -> Vec<&'a ContentRecord> {
    records
        .iter()
        .filter(|record| record.tags.iter().any(|t| eq_fold(t, tag)))
        .collect()
}

/// Records whose topic equals `topic` (case-insensitive), in input order.
///
/// Records without a topic never match.
pub fn filter_by_topic<'a>(records: &'a [ContentRecord], topic: &str) -> Vec<&'a ContentRecord> {
    records
        .iter()
        .filter(|record| record.topic.as_deref().is_some_and(|t| eq_fold(t, topic)))
        .collect()
}

/// Tag frequencies, most used first. Ties sort by name.
pub fn all_tags(records: &[ContentRecord]) -> Vec<TermCount> {
    count_names(records.iter().flat_map(|record| record.tags.iter()))
}

/// Topic frequencies, most used first. Ties sort by name.
pub fn all_topics(records: &[ContentRecord]) -> Vec<TermCount> {
    count_names(records.iter().filter_map(|record| record.topic.as_ref()))
}

fn count_names<'a>(names: impl Iterator<Item = &'a String>) -> Vec<TermCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for name in names {
        *counts.entry(name.as_str()).or_insert(0) += 1;
    }

    let mut table: Vec<TermCount> = counts
        .into_iter()
        .map(|(name, count)| TermCount {
            name: name.to_string(),
            count,
        })
        .collect();
    table.sort_by(compare_counts);
    table
}
