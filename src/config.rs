// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `postsift.toml`: scoring weights and listing defaults.
//!
//! Every field has a default, so an empty file, a missing table or no file at
//! all are all valid.
//!
//! ```toml
//! [scoring]
//! title_term = 10
//! content_cap = 10
//!
//! [listing]
//! per_page = 12
//!
//! [search]
//! limit = 20
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ConfigError;
use crate::reading_time::DEFAULT_WORDS_PER_MINUTE;
use crate::scoring::ScoringWeights;

/// File picked up from the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "postsift.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringWeights,

    #[serde(default)]
    pub listing: ListingConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Records per listing page
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Pages shown either side of the current one in the pager strip
    #[serde(default = "default_siblings")]
    pub siblings: usize,

    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            siblings: default_siblings(),
            words_per_minute: default_words_per_minute(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum results printed by `postsift search`
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

fn default_per_page() -> usize {
    10
}

fn default_siblings() -> usize {
    1
}

fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

fn default_limit() -> usize {
    10
}

impl Config {
    /// Parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Resolve the effective config: explicit path, then `./postsift.toml`,
    /// then defaults. An explicit path that does not exist is an error.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let candidate: Option<PathBuf> = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let local = PathBuf::from(CONFIG_FILE);
                local.is_file().then_some(local)
            }
        };

        match candidate {
            Some(path) => {
                debug!(path = %path.display(), "loading config");
                Self::load(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
