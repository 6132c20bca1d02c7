//! User settings for ynab-metrics
//!
//! Persisted as JSON in the config directory. A missing file means defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExporterPaths;
use crate::error::ExporterError;
use crate::services::StalePolicy;
use crate::storage::{read_json, write_json_atomic};

/// User settings for ynab-metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Prefix prepended to every metric name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_prefix: Option<String>,

    /// Whether series of vanished categories are kept between cycles
    #[serde(default)]
    pub stale_policy: StalePolicy,

    /// Snapshot used when no path is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_path: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            metric_prefix: None,
            stale_policy: StalePolicy::default(),
            snapshot_path: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExporterPaths) -> Result<Self, ExporterError> {
        read_json(paths.settings_file()).map_err(|e| match e {
            ExporterError::Json(msg) => {
                ExporterError::Config(format!("Failed to parse settings file: {}", msg))
            }
            other => other,
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExporterPaths) -> Result<(), ExporterError> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }

    /// The configured prefix, treating an empty string as none
    pub fn metric_prefix(&self) -> Option<&str> {
        self.metric_prefix.as_deref().filter(|p| !p.is_empty())
    }
}
