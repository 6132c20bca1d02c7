//! ynab-metrics - Prometheus gauges for budget categories
//!
//! Reads a snapshot of budgets from a budgeting service and publishes five
//! gauges per non-deleted category: budgeted, activity, balance, goal target
//! and the monthly contribution needed to reach that goal.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Snapshot data models (budgets, groups, categories, milliunits)
//! - `storage`: Budget sources and JSON/YAML file helpers
//! - `services`: Group lookup, goal amortization, the collector
//! - `metrics`: The five gauge vectors
//! - `display`, `cli`: Command-line surface
//!
//! # Example
//!
//! ```rust,ignore
//! use ynab_metrics::{CategoryCollector, CategoryMetrics, SnapshotFile};
//!
//! let registry = prometheus::Registry::new();
//! let metrics = CategoryMetrics::new()?;
//! metrics.register(&registry)?;
//!
//! let collector = CategoryCollector::new(metrics);
//! collector.collect_from(&SnapshotFile::new("budgets.json"), today)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExporterError, ExporterResult};
pub use metrics::CategoryMetrics;
pub use services::{CategoryCollector, StalePolicy};
pub use storage::{BudgetSource, SnapshotFile};
