// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Listing pages and the pager strip underneath them.
//!
//! Pages are 1-based, as they appear in URLs (`/blog/page/2`). Out-of-range
//! requests clamp instead of failing: a stale link to page 40 of a 3-page
//! archive lands on page 3.

use serde::Serialize;
use std::collections::BTreeSet;

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

/// An entry in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Number of pages needed for `total_items`. Never less than 1.
pub fn page_count(total_items: usize, per_page: usize) -> usize {
    total_items.div_ceil(per_page.max(1)).max(1)
}

/// Slice `items` into the requested 1-based page.
///
/// `per_page == 0` is treated as 1. `page == 0` is treated as 1 and pages past
/// the end clamp to the last page. An empty input yields a single empty page.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = page_count(items.len(), per_page);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    let slice = items.get(start..end).unwrap_or(&[]);

    Page {
        items: slice.to_vec(),
        page,
        per_page,
        total_items: items.len(),
        total_pages,
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

/// Build the pager strip for `current` of `total` pages.
///
/// Always shows the first page, the last page and `siblings` pages either side
/// of `current`. A hole of one page is filled with that page (an ellipsis
/// would take the same room). Larger holes collapse to one `Ellipsis`.
///
/// ```
/// use postsift::{page_range, PageLink::{Ellipsis, Page}};
///
/// assert_eq!(
///     page_range(6, 12, 1),
///     vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(12)]
/// );
/// assert_eq!(page_range(2, 4, 1), vec![Page(1), Page(2), Page(3), Page(4)]);
/// ```
pub fn page_range(current: usize, total: usize, siblings: usize) -> Vec<PageLink> {
    if total == 0 {
        return Vec::new();
    }
    let current = current.clamp(1, total);

    let mut shown = BTreeSet::new();
    shown.insert(1);
    shown.insert(total);
    let low = current.saturating_sub(siblings).max(1);
    let high = current.saturating_add(siblings).min(total);
    shown.extend(low..=high);

    let mut links = Vec::with_capacity(shown.len() + 2);
    let mut previous: Option<usize> = None;
    for page in shown {
        if let Some(prev) = previous {
            match page - prev {
                1 => {}
                2 => links.push(PageLink::Page(prev + 1)),
                _ => links.push(PageLink::Ellipsis),
            }
        }
        links.push(PageLink::Page(page));
        previous = Some(page);
    }
    links
}
