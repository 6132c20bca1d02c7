//! Core data models for ynab-metrics
//!
//! This module contains the read-only snapshot of the budgeting service:
//! budgets, category groups, categories, and the value types they carry.

pub mod budget;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod month;

pub use budget::{Budget, BudgetSnapshot};
pub use category::{Category, CategoryGroup};
pub use goal::GoalType;
pub use ids::{BudgetId, CategoryGroupId, CategoryId};
pub use money::Milliunits;
pub use month::YearMonth;
