//! Collect CLI command
//!
//! Runs one collection cycle against a fresh registry and writes the result
//! in the Prometheus text format.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use prometheus::{Encoder, Registry, TextEncoder};
use tracing::info;

use super::resolve_snapshot_path;
use crate::config::paths::ExporterPaths;
use crate::config::settings::Settings;
use crate::error::ExporterResult;
use crate::metrics::CategoryMetrics;
use crate::services::{CategoryCollector, CollectionSummary, StalePolicy};
use crate::storage::SnapshotFile;

/// Arguments for `collect`
#[derive(Debug, Args)]
pub struct CollectArgs {
    /// Budget snapshot (JSON or YAML); defaults to the configured snapshot
    pub snapshot: Option<PathBuf>,

    /// Prefix for metric names (overrides the configured prefix)
    #[arg(long, env = "YNAB_METRICS_PREFIX")]
    pub prefix: Option<String>,

    /// Clear series of categories missing from this snapshot
    #[arg(long)]
    pub reset_stale: bool,
}

/// Handle the collect command
pub fn handle_collect_command<W: Write>(
    paths: &ExporterPaths,
    settings: &Settings,
    args: CollectArgs,
    today: NaiveDate,
    out: &mut W,
) -> ExporterResult<CollectionSummary> {
    let snapshot = resolve_snapshot_path(args.snapshot, settings, paths)?;

    let prefix = args
        .prefix
        .as_deref()
        .or_else(|| settings.metric_prefix())
        .unwrap_or("");
    let stale_policy = if args.reset_stale {
        StalePolicy::Reset
    } else {
        settings.stale_policy
    };

    let registry = Registry::new();
    let metrics = CategoryMetrics::with_prefix(prefix)?;
    metrics.register(&registry)?;

    let collector = CategoryCollector::new(metrics).with_stale_policy(stale_policy);
    let source = SnapshotFile::new(&snapshot);
    let summary = collector.collect_from(&source, today)?;

    info!(
        snapshot = %snapshot.display(),
        categories = summary.categories,
        skipped_deleted = summary.skipped_deleted,
        "writing exposition"
    );

    TextEncoder::new().encode(&registry.gather(), out)?;
    Ok(summary)
}
