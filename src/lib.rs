// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scored multi-field search for blog content.
//!
//! Give it the site's posts and a query, get back the posts that match, best
//! first. No index to build, no state to keep: every call scores the records
//! it is handed and forgets them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  content    │────▶│   search     │────▶│   scoring    │
//! │ (manifest,  │     │ (Query, rank,│     │ (weights,    │
//! │  loader)    │     │  search)     │     │  ranking)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  taxonomy · pagination · reading_time               │
//! │  (tag/topic filters and counts, pager, "5 min read")│
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use postsift::{search, ContentRecord, MatchedField};
//!
//! let records = vec![ContentRecord {
//!     slug: "3d-guide".into(),
//!     title: "3D Rendering Guide".into(),
//!     description: "Learn 3D rendering".into(),
//!     tags: vec!["3d".into(), "rendering".into()],
//!     topic: Some("tutorials".into()),
//!     sections: None,
//! }];
//!
//! let results = search(&records, "3D rendering");
//! assert_eq!(results[0].score, 64);
//! assert!(results[0].matched(MatchedField::Tags));
//! assert!(!results[0].matched(MatchedField::Topic));
//! ```

// Module declarations
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod pagination;
pub mod reading_time;
pub mod scoring;
pub mod search;
pub mod taxonomy;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use config::Config;
pub use content::{load_manifest, load_records, load_source, InputManifest};
pub use error::{ConfigError, ContentError};
pub use pagination::{page_count, page_range, paginate, Page, PageLink};
pub use reading_time::{reading_time, record_reading_time, DEFAULT_WORDS_PER_MINUTE};
pub use scoring::{score_record, RecordScore, ScoringWeights};
#[cfg(feature = "parallel")]
pub use content::{load_records_with_progress, load_source_with_progress};
#[cfg(feature = "parallel")]
pub use search::search_parallel;
pub use search::{rank, rank_with_weights, search, search_with_weights, Query};
pub use taxonomy::{all_tags, all_topics, filter_by_tag, filter_by_topic};
pub use types::{
    ContentRecord, Hit, MatchedField, MatchedFields, ScoredResult, Section, TermCount,
};
pub use utils::fold_case;
