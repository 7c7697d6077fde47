// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the postsift command-line interface.
//!
//! Four subcommands over a content source: `search` ranks records against a
//! query, `tags` and `topics` print frequency tables, and `list` pages through
//! records the way the blog index does. Every command takes `--json` for
//! scripting.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "postsift",
    about = "Search, filter and page through blog content",
    version
)]
pub struct Cli {
    /// Path to postsift.toml (defaults to ./postsift.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank records against a query
    Search {
        /// Content directory (with manifest.json) or JSON array file
        source: PathBuf,

        /// Search query
        query: String,

        /// Maximum number of results to print (defaults to [search].limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only search records carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only search records in this topic
        #[arg(long)]
        topic: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print tag frequencies
    Tags {
        /// Content directory (with manifest.json) or JSON array file
        source: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print topic frequencies
    Topics {
        /// Content directory (with manifest.json) or JSON array file
        source: PathBuf,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print one page of records with the pager strip
    List {
        /// Content directory (with manifest.json) or JSON array file
        source: PathBuf,

        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Records per page (defaults to [listing].per_page)
        #[arg(long)]
        per_page: Option<usize>,

        /// Only list records carrying this tag
        #[arg(long)]
        tag: Option<String>,

        /// Only list records in this topic
        #[arg(long)]
        topic: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
