// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical record builders to avoid duplication.

#![doc(hidden)]

use crate::types::{ContentRecord, Section};

/// Create a record with a slug, title and description and nothing else.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(slug: &str, title: &str, description: &str) -> ContentRecord {
    ContentRecord {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tags: vec![],
        topic: None,
        sections: None,
    }
}

/// Replace a record's tags.
pub fn with_tags(mut record: ContentRecord, tags: &[&str]) -> ContentRecord {
    record.tags = tags.iter().map(|t| t.to_string()).collect();
    record
}

/// Set a record's topic.
pub fn with_topic(mut record: ContentRecord, topic: &str) -> ContentRecord {
    record.topic = Some(topic.to_string());
    record
}

/// Replace a record's sections with `(title, content)` pairs.
pub fn with_sections(
    mut record: ContentRecord,
    sections: &[(Option<&str>, Option<&str>)],
) -> ContentRecord {
    record.sections = Some(
        sections
            .iter()
            .map(|(title, content)| Section {
                title: title.map(str::to_string),
                content: content.map(str::to_string),
            })
            .collect(),
    );
    record
}
