// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Getting records off disk.
//!
//! Two layouts are accepted:
//!
//! ```text
//! content/                      posts.json
//! ├── manifest.json             [
//! ├── intro.json                  {"slug": "intro", ...},
//! └── gpu-farms.json              {"slug": "gpu-farms", ...}
//!                               ]
//! ```
//!
//! The manifest lists record files in the order the site wants them listed.

pub mod loader;
pub mod manifest;

pub use loader::*;
pub use manifest::*;
