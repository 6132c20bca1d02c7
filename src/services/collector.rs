//! Category collector
//!
//! Drives one collection cycle: for each budget, resolve group names; for each
//! non-deleted category, project its goal and publish its five figures.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::goal::GoalAmortizer;
use super::groups::GroupNames;
use crate::error::ExporterResult;
use crate::metrics::{CategoryFigures, CategoryMetrics, MetricLabels};
use crate::models::Budget;
use crate::storage::BudgetSource;

/// What happens to series of categories missing from the current cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Keep publishing the last value (default)
    #[default]
    Keep,
    /// Clear every series before the cycle writes
    Reset,
}

/// One category's labels and figures, as derived for a cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryReading {
    pub labels: MetricLabels,
    pub figures: CategoryFigures,
}

/// Counts from one collection cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionSummary {
    pub budgets: usize,
    pub categories: usize,
    pub skipped_deleted: usize,
}

/// Derive the readings for every non-deleted category of every budget
///
/// Pure: no metrics are touched.
pub fn derive_readings(budgets: &[Budget], today: NaiveDate) -> Vec<CategoryReading> {
    let amortizer = GoalAmortizer::new(today);
    budgets
        .iter()
        .flat_map(|budget| budget_readings(budget, &amortizer))
        .collect()
}

fn budget_readings(budget: &Budget, amortizer: &GoalAmortizer) -> Vec<CategoryReading> {
    let groups = GroupNames::from_groups(&budget.category_groups);

    budget
        .active_categories()
        .map(|category| CategoryReading {
            labels: MetricLabels::new(
                budget.name.as_str(),
                category.name.as_str(),
                groups.name_of(&category.group_id),
            ),
            figures: CategoryFigures::new(
                category.budgeted,
                category.activity,
                category.balance,
                amortizer.project(category),
            ),
        })
        .collect()
}

/// Publishes category figures into an injected set of gauges
#[derive(Debug, Clone)]
pub struct CategoryCollector {
    metrics: CategoryMetrics,
    stale_policy: StalePolicy,
}

impl CategoryCollector {
    /// Create a collector writing into `metrics`
    pub fn new(metrics: CategoryMetrics) -> Self {
        Self {
            metrics,
            stale_policy: StalePolicy::default(),
        }
    }

    pub fn with_stale_policy(mut self, stale_policy: StalePolicy) -> Self {
        self.stale_policy = stale_policy;
        self
    }

    /// Run one cycle over an already-fetched set of budgets
    pub fn collect(&self, budgets: &[Budget], today: NaiveDate) -> CollectionSummary {
        info!("Collecting category metrics...");

        if self.stale_policy == StalePolicy::Reset {
            self.metrics.reset();
        }

        let amortizer = GoalAmortizer::new(today);
        let mut summary = CollectionSummary::default();

        for budget in budgets {
            let readings = budget_readings(budget, &amortizer);
            let skipped = budget.categories.len() - readings.len();

            for reading in &readings {
                self.metrics.record(&reading.labels, &reading.figures);
            }

            debug!(
                budget = %budget.name,
                categories = readings.len(),
                skipped_deleted = skipped,
                "published budget categories"
            );

            summary.budgets += 1;
            summary.categories += readings.len();
            summary.skipped_deleted += skipped;
        }

        info!(
            budgets = summary.budgets,
            categories = summary.categories,
            "category metrics collected"
        );
        summary
    }

    /// Fetch budgets from `source`, then run one cycle
    pub fn collect_from(
        &self,
        source: &dyn BudgetSource,
        today: NaiveDate,
    ) -> ExporterResult<CollectionSummary> {
        let budgets = source.fetch_budgets()?;
        Ok(self.collect(&budgets, today))
    }
}
