//! Service layer for ynab-metrics
//!
//! The derivation core: group name lookup, goal amortization, and the
//! collector that turns a budget snapshot into gauge updates.

pub mod collector;
pub mod goal;
pub mod groups;

pub use collector::{
    derive_readings, CategoryCollector, CategoryReading, CollectionSummary, StalePolicy,
};
pub use goal::{GoalAmortizer, GoalProjection};
pub use groups::GroupNames;
