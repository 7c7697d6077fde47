// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Record loading, in parallel when the `parallel` feature is on.
//!
//! Reading and parsing one JSON file per post is embarrassingly parallel.
//! Rayon's indexed `collect` keeps manifest order, so the sequential and
//! parallel paths hand the same `Vec` to search.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::ContentError;
use crate::types::ContentRecord;

use super::{load_manifest, InputManifest};

/// Load every record listed in `manifest`, relative to `input_dir`.
///
/// Fails on the first unreadable or invalid file, and on duplicate slugs.
pub fn load_records(
    input_dir: &Path,
    manifest: &InputManifest,
) -> Result<Vec<ContentRecord>, ContentError> {
    #[cfg(feature = "parallel")]
    let records = manifest
        .records
        .par_iter()
        .map(|filename| read_record(input_dir, filename))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let records = manifest
        .records
        .iter()
        .map(|filename| read_record(input_dir, filename))
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique_slugs(&records, input_dir)?;
    info!(count = records.len(), dir = %input_dir.display(), "loaded records");
    Ok(records)
}

/// Same as `load_records`, advancing `progress` once per file.
#[cfg(feature = "parallel")]
pub fn load_records_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> Result<Vec<ContentRecord>, ContentError> {
    let counter = AtomicUsize::new(0);
    let total = manifest.records.len();

    let records = manifest
        .records
        .par_iter()
        .map(|filename| {
            let record = read_record(input_dir, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(record)
        })
        .collect::<Result<Vec<_>, ContentError>>()?;

    ensure_unique_slugs(&records, input_dir)?;
    info!(count = records.len(), dir = %input_dir.display(), "loaded records");
    Ok(records)
}

/// Load a content source: a directory with `manifest.json`, or a JSON array file.
pub fn load_source(path: &Path) -> Result<Vec<ContentRecord>, ContentError> {
    if path.is_dir() {
        let manifest = load_manifest(path)?;
        return load_records(path, &manifest);
    }
    load_array_file(path)
}

/// Same as `load_source`, reporting per-file progress for directory sources.
///
/// The bar's length is set from the manifest. A JSON array file is a single
/// read, so the bar just jumps to the record count.
#[cfg(feature = "parallel")]
pub fn load_source_with_progress(
    path: &Path,
    progress: &ProgressBar,
) -> Result<Vec<ContentRecord>, ContentError> {
    if path.is_dir() {
        let manifest = load_manifest(path)?;
        progress.set_length(manifest.records.len() as u64);
        return load_records_with_progress(path, &manifest, progress);
    }

    let records = load_array_file(path)?;
    progress.set_length(records.len() as u64);
    progress.set_position(records.len() as u64);
    Ok(records)
}

fn load_array_file(path: &Path) -> Result<Vec<ContentRecord>, ContentError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Err(ContentError::UnsupportedSource(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<ContentRecord> =
        serde_json::from_str(&raw).map_err(|source| ContentError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    ensure_unique_slugs(&records, path)?;
    info!(count = records.len(), file = %path.display(), "loaded records");
    Ok(records)
}

fn read_record(input_dir: &Path, filename: &str) -> Result<ContentRecord, ContentError> {
    let path = input_dir.join(filename);
    debug!(file = %path.display(), "reading record");
    let raw = fs::read_to_string(&path).map_err(|source| ContentError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ContentError::Json { path, source })
}

fn ensure_unique_slugs(records: &[ContentRecord], origin: &Path) -> Result<(), ContentError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(record.slug.as_str()) {
            return Err(ContentError::DuplicateSlug {
                slug: record.slug.clone(),
                path: origin.to_path_buf(),
            });
        }
    }
    Ok(())
}
