//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod collect;
pub mod inspect;

pub use collect::{handle_collect_command, CollectArgs};
pub use inspect::{handle_inspect_command, InspectArgs};

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::paths::ExporterPaths;
use crate::config::settings::Settings;
use crate::error::{ExporterError, ExporterResult};

/// Pick the snapshot path from the command line, then from settings, then
/// the default snapshot file in the config directory if one was saved there
pub fn resolve_snapshot_path(
    arg: Option<PathBuf>,
    settings: &Settings,
    paths: &ExporterPaths,
) -> ExporterResult<PathBuf> {
    if let Some(path) = arg.or_else(|| settings.snapshot_path.clone()) {
        return Ok(path);
    }

    let default = paths.default_snapshot_file();
    if default.exists() {
        return Ok(default);
    }

    Err(ExporterError::Config(format!(
        "No snapshot given; pass a path, set snapshot_path in config.json or save one to {}",
        default.display()
    )))
}

/// Parse a `--date` value (YYYY-MM-DD)
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}
