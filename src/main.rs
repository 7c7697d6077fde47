// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::info;

use postsift::{
    all_tags, all_topics, filter_by_tag, filter_by_topic, logging, page_range, paginate,
    record_reading_time, search_with_weights, Config, ContentRecord, TermCount,
};
#[cfg(not(feature = "parallel"))]
use postsift::load_source;
#[cfg(feature = "parallel")]
use postsift::load_source_with_progress;

mod cli;
use cli::display::{
    field_label, pad_right, pager, row, score_value, section_bot, section_top, themed, truncate,
    BOLD, BOX_WIDTH, CYAN, GRAY,
};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("warning: {:#}", e);
    }

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Search {
            source,
            query,
            limit,
            tag,
            topic,
            json,
        } => {
            let records = load(&source, json)?;
            let records = narrow(&records, tag.as_deref(), topic.as_deref());
            let limit = limit.unwrap_or(config.search.limit);
            run_search(&records, &query, limit, &config, json)
        }
        Commands::Tags { source, json } => {
            let records = load(&source, json)?;
            print_counts("TAGS", &all_tags(&records), json)
        }
        Commands::Topics { source, json } => {
            let records = load(&source, json)?;
            print_counts("TOPICS", &all_topics(&records), json)
        }
        Commands::List {
            source,
            page,
            per_page,
            tag,
            topic,
            json,
        } => {
            let records = load(&source, json)?;
            let records = narrow(&records, tag.as_deref(), topic.as_deref());
            let per_page = per_page.unwrap_or(config.listing.per_page);
            run_list(&records, page, per_page, &config, json)
        }
    }
}

#[cfg(feature = "parallel")]
fn load(source: &Path, json: bool) -> Result<Vec<ContentRecord>> {
    let progress = load_progress(json);
    let records = load_source_with_progress(source, &progress)
        .with_context(|| format!("Failed to load content from {}", source.display()));
    progress.finish_and_clear();
    records
}

#[cfg(not(feature = "parallel"))]
fn load(source: &Path, _json: bool) -> Result<Vec<ContentRecord>> {
    load_source(source).with_context(|| format!("Failed to load content from {}", source.display()))
}

/// Loading bar on stderr. Hidden for `--json` and when stderr is not a terminal.
#[cfg(feature = "parallel")]
fn load_progress(json: bool) -> ProgressBar {
    if json || !atty::is(atty::Stream::Stderr) {
        return ProgressBar::hidden();
    }
    let progress = ProgressBar::new(0);
    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .map(|style| style.progress_chars("━━╸"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress.set_prefix("Loading");
    progress.set_message("records...");
    progress
}

/// Apply the optional tag/topic filters, keeping input order.
fn narrow(records: &[ContentRecord], tag: Option<&str>, topic: Option<&str>) -> Vec<ContentRecord> {
    let mut narrowed: Vec<ContentRecord> = match tag {
        Some(tag) => filter_by_tag(records, tag).into_iter().cloned().collect(),
        None => records.to_vec(),
    };
    if let Some(topic) = topic {
        let in_topic: Vec<ContentRecord> = filter_by_topic(&narrowed, topic)
            .into_iter()
            .cloned()
            .collect();
        narrowed = in_topic;
    }
    narrowed
}

fn run_search(
    records: &[ContentRecord],
    query: &str,
    limit: usize,
    config: &Config,
    json: bool,
) -> Result<()> {
    let mut results = search_with_weights(records, query, &config.scoring);
    let total = results.len();
    results.truncate(limit);
    info!(query, total, shown = results.len(), "search complete");

    if json {
        return print_json(&results);
    }

    section_top(&format!(
        "SEARCH \"{}\" · {} of {} matches",
        truncate(query, 24),
        results.len(),
        total
    ));
    if results.is_empty() {
        row(&themed(GRAY, &[], "  no matches"));
    }
    for result in &results {
        let title = themed(
            CYAN,
            &[BOLD],
            &truncate(&result.record.title, BOX_WIDTH - 9),
        );
        row(&format!(" {}  {}", score_value(result.score), title));

        let fields: Vec<String> = result
            .matched_fields
            .iter()
            .map(|field| field_label(*field))
            .collect();
        let slug = themed(GRAY, &[], &truncate(&result.record.slug, 32));
        row(&format!("        {} · {}", slug, fields.join(" ")));
    }
    section_bot();
    Ok(())
}

fn run_list(
    records: &[ContentRecord],
    page: usize,
    per_page: usize,
    config: &Config,
    json: bool,
) -> Result<()> {
    let listing = paginate(records, page, per_page);
    let links = page_range(listing.page, listing.total_pages, config.listing.siblings);

    if json {
        #[derive(serde::Serialize)]
        struct Listing<'a> {
            #[serde(flatten)]
            page: &'a postsift::Page<ContentRecord>,
            reading_minutes: Vec<u32>,
            pager: &'a [postsift::PageLink],
        }
        let reading_minutes = listing
            .items
            .iter()
            .map(|record| record_reading_time(record, config.listing.words_per_minute))
            .collect();
        return print_json(&Listing {
            page: &listing,
            reading_minutes,
            pager: &links,
        });
    }

    section_top(&format!(
        "PAGE {} / {} · {} records",
        listing.page, listing.total_pages, listing.total_items
    ));
    for record in &listing.items {
        let minutes = record_reading_time(record, config.listing.words_per_minute);
        row(&format!(
            " {}",
            themed(CYAN, &[BOLD], &truncate(&record.title, BOX_WIDTH - 2))
        ));
        let topic = record.topic.as_deref().unwrap_or("-");
        row(&themed(
            GRAY,
            &[],
            &truncate(
                &format!("   {} · {} · {} min read", record.slug, topic, minutes),
                BOX_WIDTH,
            ),
        ));
    }
    row("");
    row(&format!(" {}", pager(&links, listing.page)));
    section_bot();
    Ok(())
}

fn print_counts(label: &str, counts: &[TermCount], json: bool) -> Result<()> {
    if json {
        return print_json(counts);
    }

    section_top(&format!("{} · {}", label, counts.len()));
    for entry in counts {
        let name = pad_right(&truncate(&entry.name, BOX_WIDTH - 10), BOX_WIDTH - 10);
        row(&format!(" {} {:>6}", name, entry.count));
    }
    section_bot();
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}
