//! Path management for ynab-metrics
//!
//! ## Path Resolution Order
//!
//! 1. `YNAB_METRICS_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ynab-metrics` or `~/.config/ynab-metrics`
//! 3. Windows: `%APPDATA%\ynab-metrics`

use std::path::PathBuf;

use crate::error::ExporterError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "YNAB_METRICS_CONFIG_DIR";

/// Manages all paths used by ynab-metrics
#[derive(Debug, Clone)]
pub struct ExporterPaths {
    base_dir: PathBuf,
}

impl ExporterPaths {
    /// Resolve the config directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExporterError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Default location for a saved budget snapshot
    pub fn default_snapshot_file(&self) -> PathBuf {
        self.base_dir.join("budgets.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), ExporterError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExporterError::Io(format!("Failed to create config directory: {}", e)))
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExporterError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                ExporterError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("ynab-metrics"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExporterError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExporterError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ynab-metrics"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExporterPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.default_snapshot_file(),
            temp_dir.path().join("budgets.json")
        );
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());

        let paths = ExporterPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        std::env::remove_var(CONFIG_DIR_ENV);
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExporterPaths::with_base_dir(temp_dir.path().join("nested").join("cfg"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
