//! File I/O utilities
//!
//! Reads budget snapshots and settings from disk, and writes settings
//! atomically so a crash never leaves a half-written config file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{ExporterError, ExporterResult};

/// On-disk encoding of a structured file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
}

impl FileFormat {
    /// Pick the format from the file extension; anything but `.yaml`/`.yml` is JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Read JSON from a file, returning a default value if the file doesn't exist
pub fn read_json<T, P>(path: P) -> ExporterResult<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(T::default());
    }

    let file = File::open(path)
        .map_err(|e| ExporterError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| ExporterError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Read a JSON or YAML file, returning an error if it doesn't exist
pub fn read_structured<T, P>(path: P) -> ExporterResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExporterError::snapshot_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| ExporterError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    let reader = BufReader::new(file);

    match FileFormat::from_path(path) {
        FileFormat::Json => serde_json::from_reader(reader).map_err(|e| {
            ExporterError::Json(format!("Failed to parse {}: {}", path.display(), e))
        }),
        FileFormat::Yaml => serde_yaml::from_reader(reader).map_err(|e| {
            ExporterError::Yaml(format!("Failed to parse {}: {}", path.display(), e))
        }),
    }
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> ExporterResult<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ExporterError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| ExporterError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExporterError::Json(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| ExporterError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| ExporterError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExporterError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
