//! Storage layer for ynab-metrics
//!
//! Snapshot sources for budget data, plus the JSON/YAML file helpers the
//! settings and snapshot readers share.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, read_structured, write_json_atomic, FileFormat};
pub use snapshot::{BudgetSource, SnapshotFile};
