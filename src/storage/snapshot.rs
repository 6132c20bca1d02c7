//! Budget data sources
//!
//! The collector never talks to the budgeting service directly. It asks a
//! `BudgetSource` for an already-fetched snapshot once per cycle.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::file_io::read_structured;
use crate::error::ExporterResult;
use crate::models::{Budget, BudgetSnapshot};

/// Anything that can hand over the current budgets
pub trait BudgetSource {
    /// Fetch every budget, in the order the upstream reports them
    fn fetch_budgets(&self) -> ExporterResult<Vec<Budget>>;
}

/// A snapshot stored on disk as JSON or YAML
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BudgetSource for SnapshotFile {
    fn fetch_budgets(&self) -> ExporterResult<Vec<Budget>> {
        let snapshot: BudgetSnapshot = read_structured(&self.path)?;
        debug!(
            path = %self.path.display(),
            budgets = snapshot.budgets.len(),
            "loaded budget snapshot"
        );
        Ok(snapshot.budgets)
    }
}

impl BudgetSource for BudgetSnapshot {
    fn fetch_budgets(&self) -> ExporterResult<Vec<Budget>> {
        Ok(self.budgets.clone())
    }
}

impl BudgetSource for Vec<Budget> {
    fn fetch_budgets(&self) -> ExporterResult<Vec<Budget>> {
        Ok(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalType;
    use std::fs;
    use tempfile::TempDir;

    const SNAPSHOT_JSON: &str = r#"{
        "budgets": [{
            "name": "Household",
            "category_groups": [{"id": "g1", "name": "Savings"}],
            "categories": [{
                "category_group_id": "g1",
                "name": "Vacation",
                "budgeted": 0,
                "activity": 0,
                "balance": 200000,
                "goal_type": "TBD",
                "goal_target": 1200000,
                "goal_target_month": "2024-07-01"
            }]
        }]
    }"#;

    #[test]
    fn test_json_snapshot_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");
        fs::write(&path, SNAPSHOT_JSON).unwrap();

        let budgets = SnapshotFile::new(&path).fetch_budgets().unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].name, "Household");
        assert_eq!(
            budgets[0].categories[0].goal_type,
            Some(GoalType::TargetBalanceByDate)
        );
    }

    #[test]
    fn test_yaml_snapshot_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.yml");
        fs::write(
            &path,
            "budgets:\n  - name: Household\n    category_groups:\n      - id: g1\n        name: Bills\n    categories:\n      - category_group_id: g1\n        name: Rent\n        budgeted: 150000\n        goal_type: MF\n        goal_target: 150000\n",
        )
        .unwrap();

        let budgets = SnapshotFile::new(&path).fetch_budgets().unwrap();
        let rent = &budgets[0].categories[0];
        assert_eq!(rent.budgeted.value(), 150_000);
        assert_eq!(rent.goal_type, Some(GoalType::MonthlyFunding));
    }

    #[test]
    fn test_missing_snapshot_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = SnapshotFile::new(temp_dir.path().join("missing.json"));
        assert!(source.fetch_budgets().unwrap_err().is_not_found());
    }

    #[test]
    fn test_in_memory_sources() {
        let budgets = vec![Budget::new("A"), Budget::new("B")];
        assert_eq!(budgets.fetch_budgets().unwrap().len(), 2);

        let snapshot = BudgetSnapshot { budgets };
        assert_eq!(snapshot.fetch_budgets().unwrap()[1].name, "B");
    }
}
