// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading content and configuration.
//!
//! Search itself cannot fail. Everything that can go wrong happens at the
//! edges: reading files and parsing them.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading content records.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported manifest version {version} in {path} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        version: u32,
        expected: u32,
    },

    #[error("duplicate slug '{slug}' in {path}")]
    DuplicateSlug { slug: String, path: PathBuf },

    #[error("{0} is neither a directory with manifest.json nor a .json file")]
    UnsupportedSource(PathBuf),
}

/// Failure while loading `postsift.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
