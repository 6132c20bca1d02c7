//! Inspect CLI command
//!
//! Shows the figures a collection cycle would publish, without touching a
//! registry.

use std::io::Write;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use super::resolve_snapshot_path;
use crate::config::paths::ExporterPaths;
use crate::config::settings::Settings;
use crate::display::format_readings_table;
use crate::error::{ExporterError, ExporterResult};
use crate::services::derive_readings;
use crate::storage::{BudgetSource, SnapshotFile};

/// Arguments for `inspect`
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Budget snapshot (JSON or YAML); defaults to the configured snapshot
    pub snapshot: Option<PathBuf>,

    /// Only show this budget
    #[arg(short, long)]
    pub budget: Option<String>,
}

/// Handle the inspect command
pub fn handle_inspect_command<W: Write>(
    paths: &ExporterPaths,
    settings: &Settings,
    args: InspectArgs,
    today: NaiveDate,
    out: &mut W,
) -> ExporterResult<()> {
    let snapshot = resolve_snapshot_path(args.snapshot, settings, paths)?;
    let mut budgets = SnapshotFile::new(snapshot).fetch_budgets()?;

    if let Some(name) = &args.budget {
        budgets.retain(|b| b.name.eq_ignore_ascii_case(name));
        if budgets.is_empty() {
            return Err(ExporterError::budget_not_found(name.as_str()));
        }
    }

    let readings = derive_readings(&budgets, today);
    writeln!(out, "Goals evaluated as of {}", today.format("%Y-%m-%d"))?;
    writeln!(out)?;
    write!(out, "{}", format_readings_table(&readings))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r#"{
        "budgets": [
            {
                "name": "Household",
                "category_groups": [{"id": "g2", "name": "Savings"}],
                "categories": [{
                    "category_group_id": "g2", "name": "Vacation",
                    "budgeted": 0, "activity": 0, "balance": 200000,
                    "goal_type": "TBD", "goal_target": 1200000,
                    "goal_target_month": "2024-07-01"
                }]
            },
            {
                "name": "Business",
                "category_groups": [{"id": "b1", "name": "Overhead"}],
                "categories": [{"category_group_id": "b1", "name": "Rent", "budgeted": 900000}]
            }
        ]
    }"#;

    fn setup() -> (TempDir, ExporterPaths, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        fs::write(&path, SNAPSHOT).unwrap();
        let paths = ExporterPaths::with_base_dir(temp_dir.path().join("config"));
        (temp_dir, paths, path)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_inspect_all_budgets() {
        let (_temp, paths, path) = setup();
        let mut out = Vec::new();
        let args = InspectArgs {
            snapshot: Some(path),
            budget: None,
        };

        handle_inspect_command(&paths, &Settings::default(), args, today(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Goals evaluated as of 2024-01-15"));
        assert!(text.contains("Budget: Household"));
        assert!(text.contains("Budget: Business"));
        assert!(text.contains("142.857"));
    }

    #[test]
    fn test_inspect_one_budget() {
        let (_temp, paths, path) = setup();
        let mut out = Vec::new();
        let args = InspectArgs {
            snapshot: Some(path),
            budget: Some("business".into()),
        };

        handle_inspect_command(&paths, &Settings::default(), args, today(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Budget: Business"));
        assert!(!text.contains("Household"));
    }

    #[test]
    fn test_inspect_unknown_budget() {
        let (_temp, paths, path) = setup();
        let mut out = Vec::new();
        let args = InspectArgs {
            snapshot: Some(path),
            budget: Some("Nope".into()),
        };

        let err = handle_inspect_command(&paths, &Settings::default(), args, today(), &mut out)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
