//! Custom error types for ynab-metrics
//!
//! The derivation core never fails. These errors come from the shell around
//! it: reading settings and snapshots, registering and encoding metrics.

use thiserror::Error;

/// The main error type for ynab-metrics operations
#[derive(Error, Debug)]
pub enum ExporterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Metric registration or encoding errors
    #[error("Metrics error: {0}")]
    Metrics(String),
}

impl ExporterError {
    /// Create a "not found" error for snapshot files
    pub fn snapshot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Snapshot",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budgets
    pub fn budget_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for ExporterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExporterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for ExporterError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<prometheus::Error> for ExporterError {
    fn from(err: prometheus::Error) -> Self {
        Self::Metrics(err.to_string())
    }
}

/// Result type alias for ynab-metrics operations
pub type ExporterResult<T> = Result<T, ExporterError>;
