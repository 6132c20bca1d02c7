//! Tracing subscriber setup
//!
//! Logs go to stderr so stdout stays clean for exposition output.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "ynab_metrics=info";

/// Initializes the global tracing subscriber once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
