//! Metrics publication for budget categories.
//!
//! # Available Metrics
//!
//! All gauges are labeled `{budget_name, name, group_name}` and published in
//! currency units (milliunits / 1000).
//!
//! - `category_budget` - Amount assigned this month
//! - `category_activity` - Net spending this month
//! - `category_balance` - Available balance
//! - `category_goal_target` - Overall goal target
//! - `category_monthly_goal_target` - Contribution needed per month
//!
//! A configured prefix is prepended as `{prefix}_category_budget`, etc.

mod gauges;

pub use gauges::{CategoryFigures, CategoryMetrics, MetricLabels, LABEL_NAMES};
