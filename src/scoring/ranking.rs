// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Sort order:
//! 1. **Score**, descending.
//! 2. **Input position**, ascending. Equal scores keep the order the records
//!    were supplied in, so the same inputs always produce the same output.

use crate::types::{Hit, TermCount};
use std::cmp::Ordering;

/// Compare two hits for ranking. `Less` means `a` ranks first.
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.score.cmp(&a.score).then_with(|| a.index.cmp(&b.index))
}

/// Sort hits into final ranking order.
pub fn sort_hits(hits: &mut [Hit]) {
    hits.sort_unstable_by(compare_hits);
}

/// Compare two frequency entries: higher count first, then name ascending.
pub fn compare_counts(a: &TermCount, b: &TermCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name))
}
