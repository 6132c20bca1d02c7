//! Configuration module for ynab-metrics
//!
//! - config directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExporterPaths;
pub use settings::Settings;
