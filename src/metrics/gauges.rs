//! Prometheus gauges for budget categories.
//!
//! Five gauge vectors share the label set `{budget_name, name, group_name}`.
//! The vectors work without a Registry; registration is only needed for
//! exposition.
//!
//! # Usage
//!
//! ```ignore
//! let registry = prometheus::Registry::new();
//! let metrics = CategoryMetrics::new()?;
//! metrics.register(&registry)?;
//!
//! // Later: encode for scraping
//! let encoder = TextEncoder::new();
//! encoder.encode(&registry.gather(), &mut buffer)?;
//! ```
//!
//! Writing a label triple overwrites its previous value. Series for
//! categories that stop appearing stay at their last value until
//! [`CategoryMetrics::reset`] is called.

use prometheus::{GaugeVec, Opts, Registry};

use crate::error::ExporterResult;
use crate::models::Milliunits;
use crate::services::GoalProjection;

/// Label names, in the order values are supplied
pub const LABEL_NAMES: [&str; 3] = ["budget_name", "name", "group_name"];

/// The label triple identifying one category's series
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetricLabels {
    pub budget_name: String,
    pub name: String,
    pub group_name: String,
}

impl MetricLabels {
    pub fn new(
        budget_name: impl Into<String>,
        name: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        Self {
            budget_name: budget_name.into(),
            name: name.into(),
            group_name: group_name.into(),
        }
    }

    /// Values in [`LABEL_NAMES`] order
    pub fn values(&self) -> [&str; 3] {
        [
            self.budget_name.as_str(),
            self.name.as_str(),
            self.group_name.as_str(),
        ]
    }
}

/// The five figures published for a category, still in milliunits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryFigures {
    pub budgeted: Milliunits,
    pub activity: Milliunits,
    pub balance: Milliunits,
    pub goal_target: Milliunits,
    pub monthly_goal_target: Milliunits,
}

impl CategoryFigures {
    pub fn new(
        budgeted: Milliunits,
        activity: Milliunits,
        balance: Milliunits,
        goal: GoalProjection,
    ) -> Self {
        Self {
            budgeted,
            activity,
            balance,
            goal_target: goal.goal_target,
            monthly_goal_target: goal.monthly_goal_target,
        }
    }
}

/// Gauge vectors for category figures, published in currency units.
#[derive(Clone)]
pub struct CategoryMetrics {
    /// Amount assigned this month
    pub budgeted: GaugeVec,

    /// Net spending this month
    pub activity: GaugeVec,

    /// Available balance
    pub balance: GaugeVec,

    /// Overall goal target
    pub goal_target: GaugeVec,

    /// Contribution needed per month to reach the goal
    pub monthly_goal_target: GaugeVec,
}

impl CategoryMetrics {
    /// Create metrics with unprefixed names (`category_budget`, ...)
    pub fn new() -> ExporterResult<Self> {
        Self::build("")
    }

    /// Create metrics with a name prefix.
    ///
    /// Metric names will be `{prefix}_category_budget`, etc. The prefix is
    /// sanitized to a valid Prometheus metric name: hyphens and other invalid
    /// characters become underscores. An empty prefix is the same as
    /// [`CategoryMetrics::new`].
    ///
    /// ```ignore
    /// let metrics = CategoryMetrics::with_prefix("ynab-home")?;
    /// // ynab_home_category_budget, ynab_home_category_activity, ...
    /// ```
    pub fn with_prefix(prefix: &str) -> ExporterResult<Self> {
        if prefix.is_empty() {
            return Self::build("");
        }
        Self::build(&format!("{}_", sanitize_prefix(prefix)))
    }

    fn build(prefix: &str) -> ExporterResult<Self> {
        let gauge = |name: &str, help: &str| {
            GaugeVec::new(Opts::new(format!("{}{}", prefix, name), help), &LABEL_NAMES)
        };

        Ok(Self {
            budgeted: gauge("category_budget", "Category budget gauge")?,
            activity: gauge("category_activity", "Category activity gauge")?,
            balance: gauge("category_balance", "Category balance gauge")?,
            goal_target: gauge("category_goal_target", "Category goal target gauge")?,
            monthly_goal_target: gauge(
                "category_monthly_goal_target",
                "Category monthly goal target gauge",
            )?,
        })
    }

    /// Register all gauge vectors with a Registry for exposition.
    ///
    /// # Errors
    ///
    /// Returns an error if any metric fails to register (e.g., duplicate names).
    pub fn register(&self, registry: &Registry) -> Result<(), prometheus::Error> {
        for vec in self.vectors() {
            registry.register(Box::new(vec.clone()))?;
        }
        Ok(())
    }

    /// Publish one category's figures, converted to currency units
    pub fn record(&self, labels: &MetricLabels, figures: &CategoryFigures) {
        let values = labels.values();
        set(&self.budgeted, &values, figures.budgeted);
        set(&self.activity, &values, figures.activity);
        set(&self.balance, &values, figures.balance);
        set(&self.goal_target, &values, figures.goal_target);
        set(&self.monthly_goal_target, &values, figures.monthly_goal_target);
    }

    /// Drop every series from all five vectors
    pub fn reset(&self) {
        for vec in self.vectors() {
            vec.reset();
        }
    }

    fn vectors(&self) -> [&GaugeVec; 5] {
        [
            &self.budgeted,
            &self.activity,
            &self.balance,
            &self.goal_target,
            &self.monthly_goal_target,
        ]
    }
}

fn set(vec: &GaugeVec, values: &[&str; 3], amount: Milliunits) {
    vec.with_label_values(values).set(amount.to_units());
}

// Valid chars: [a-zA-Z_:] for first char, [a-zA-Z0-9_:] for rest
fn sanitize_prefix(prefix: &str) -> String {
    prefix
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let valid = if i == 0 {
                c.is_ascii_alphabetic() || c == '_' || c == ':'
            } else {
                c.is_ascii_alphanumeric() || c == '_' || c == ':'
            };
            if valid {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl std::fmt::Debug for CategoryMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use prometheus::core::Collector;

        let series: usize = self
            .budgeted
            .collect()
            .iter()
            .map(|family| family.get_metric().len())
            .sum();
        f.debug_struct("CategoryMetrics")
            .field("series", &series)
            .finish()
    }
}
