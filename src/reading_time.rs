// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! "5 min read" estimates.

use crate::types::ContentRecord;
use crate::utils::word_count;

/// Reading speed used when none is configured.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Minutes needed to read `text`, rounded up. Never less than one minute.
///
/// A `words_per_minute` of zero falls back to `DEFAULT_WORDS_PER_MINUTE`.
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    minutes_for(word_count(text), words_per_minute)
}

/// Reading time for a record: its description plus every section heading and body.
pub fn record_reading_time(record: &ContentRecord, words_per_minute: u32) -> u32 {
    let section_words: usize = record
        .sections()
        .map(|section| {
            section.title.as_deref().map_or(0, word_count)
                + section.content.as_deref().map_or(0, word_count)
        })
        .sum();
    minutes_for(word_count(&record.description) + section_words, words_per_minute)
}

fn minutes_for(words: usize, words_per_minute: u32) -> u32 {
    let wpm = if words_per_minute == 0 {
        DEFAULT_WORDS_PER_MINUTE
    } else {
        words_per_minute
    };
    let minutes = words.div_ceil(wpm as usize);
    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}
