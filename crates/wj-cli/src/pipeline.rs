//! End-to-end pipeline: load, canonicalize, aggregate, render.
//!
//! The build phase owns the mutable catalogs: static tables first, then the
//! history rows in file order, then the reference list, then copyright
//! resolution. Aggregation only ever sees shared references, so statistics
//! are a pure function of the frozen inputs.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;

use anyhow::{Context, Result};
use chrono::Datelike;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use tracing::{info, warn};
use wj_canon::{PublisherCatalog, SongCatalog, tables};
use wj_ingest::{build_records, load_history, load_reference_list, load_song_index};
use wj_model::{SongId, WeekendRole};
use wj_report::render_report;
use wj_stats::{compute_stats, resolve_song_publishers, weekend_roles};

use crate::cli::ReportArgs;
use crate::types::ReportResult;

/// Run the full report pipeline for one target year.
pub fn run_report(args: &ReportArgs) -> Result<ReportResult> {
    let mut songs = SongCatalog::with_static_tables().context("load song alias tables")?;
    let mut publishers =
        PublisherCatalog::with_static_tables().context("load publisher alias tables")?;

    let rows = load_history(&args.history)
        .with_context(|| format!("load history {}", args.history.display()))?;
    info!(rows = rows.len(), "history rows consolidated");
    let records = build_records(&rows, &mut songs).context("build service records")?;
    info!(records = records.len(), songs = songs.len(), "service records built");

    let reference_entries = match &args.reference {
        Some(path) => load_reference_list(path)
            .with_context(|| format!("load reference list {}", path.display()))?,
        None => {
            warn!("no reference list supplied; every song of the target year counts as new");
            Vec::new()
        }
    };
    let reference: BTreeSet<SongId> = reference_entries
        .iter()
        .flat_map(|entry| songs.canonicalize(entry))
        .collect();

    let copyright = match &args.song_index {
        Some(path) => load_song_index(path)
            .with_context(|| format!("load song index {}", path.display()))?,
        None => {
            warn!("no song index supplied; publishers resolve to the unknown bucket");
            BTreeMap::new()
        }
    };
    let publisher_names =
        resolve_song_publishers(&records, args.year, &songs, &mut publishers, &copyright);

    let stats = compute_stats(&records, &songs, &reference, &publisher_names, args.year);

    let roles = weekend_roles(&records);
    let saturday_services = roles
        .iter()
        .filter(|(date, role)| date.year() == args.year && **role == WeekendRole::Saturday)
        .count();
    let sunday_services = roles
        .iter()
        .filter(|(date, role)| date.year() == args.year && **role == WeekendRole::Sunday)
        .count();

    let mut report_path = None;
    let mut stats_json_path = None;
    if args.dry_run {
        info!("dry run; skipping report output");
    } else {
        let html = render_report(&stats);
        fs::write(&args.output, html)
            .with_context(|| format!("write report {}", args.output.display()))?;
        report_path = Some(args.output.clone());
        if let Some(path) = &args.stats_json {
            let json = serde_json::to_string_pretty(&stats).context("serialize statistics")?;
            fs::write(path, json)
                .with_context(|| format!("write statistics {}", path.display()))?;
            stats_json_path = Some(path.clone());
        }
    }

    Ok(ReportResult {
        stats,
        saturday_services,
        sunday_services,
        report_path,
        stats_json_path,
    })
}

/// Print the static alias tables so the configuration can be audited.
pub fn run_aliases() {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Canonical song", "Variants"]);
    for group in tables::SONG_ALIASES {
        table.add_row(vec![group.display.to_string(), group.variants.join(" | ")]);
    }
    println!("{table}");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Canonical publisher", "Variants"]);
    for group in tables::PUBLISHER_ALIASES {
        table.add_row(vec![group.display.to_string(), group.variants.join(" | ")]);
    }
    println!("{table}");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Song", "Publisher override"]);
    for (song, publisher) in tables::PUBLISHER_OVERRIDES {
        table.add_row(vec![(*song).to_string(), (*publisher).to_string()]);
    }
    println!("{table}");
}
