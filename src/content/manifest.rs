// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ContentError;

/// File name looked up inside a content directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Manifest format version this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// Lists the record files of a content directory, in listing order.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct InputManifest {
    pub version: u32,
    pub records: Vec<String>,
}

/// Read and validate `<dir>/manifest.json`.
pub fn load_manifest(dir: &Path) -> Result<InputManifest, ContentError> {
    let path = dir.join(MANIFEST_FILE);
    let raw = fs::read_to_string(&path).map_err(|source| ContentError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest: InputManifest =
        serde_json::from_str(&raw).map_err(|source| ContentError::Json {
            path: path.clone(),
            source,
        })?;

    if manifest.version != MANIFEST_VERSION {
        return Err(ContentError::UnsupportedVersion {
            path,
            version: manifest.version,
            expected: MANIFEST_VERSION,
        });
    }
    Ok(manifest)
}
