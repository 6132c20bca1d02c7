//! Goal amortization
//!
//! Turns a category's goal settings into two figures: the overall goal target
//! and the amount that must be assigned each month to reach it. Nothing here
//! fails; missing or unusable goal data degrades to zero.

use chrono::NaiveDate;
use tracing::{trace, warn};

use crate::models::{Category, GoalType, Milliunits, YearMonth};

/// The two goal figures published for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GoalProjection {
    pub goal_target: Milliunits,
    pub monthly_goal_target: Milliunits,
}

impl GoalProjection {
    /// No goal configured
    pub const fn none() -> Self {
        Self {
            goal_target: Milliunits::zero(),
            monthly_goal_target: Milliunits::zero(),
        }
    }
}

/// Computes goal projections relative to a fixed evaluation month
#[derive(Debug, Clone, Copy)]
pub struct GoalAmortizer {
    current_month: YearMonth,
}

impl GoalAmortizer {
    /// Evaluate goals as of `today`; only its year and month matter
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current_month: YearMonth::from_date(today),
        }
    }

    /// Project a category's goal
    pub fn project(&self, category: &Category) -> GoalProjection {
        self.project_parts(
            category.goal_target,
            category.goal_type.as_ref(),
            category.balance,
            category.budgeted,
            category.goal_target_month,
        )
    }

    /// Project from the raw goal fields
    ///
    /// | target | type | result |
    /// |--------|------|--------|
    /// | absent | any | both zero |
    /// | present | absent | target only |
    /// | present | present | full computation |
    pub fn project_parts(
        &self,
        goal_target: Option<Milliunits>,
        goal_type: Option<&GoalType>,
        balance: Milliunits,
        budgeted: Milliunits,
        target_month: Option<YearMonth>,
    ) -> GoalProjection {
        let Some(goal_target) = goal_target else {
            return GoalProjection::none();
        };

        let monthly_goal_target = match goal_type {
            None => Milliunits::zero(),
            Some(GoalType::MonthlyFunding) => goal_target,
            Some(GoalType::TargetBalanceByDate) => {
                self.amortize_by_date(goal_target, balance, budgeted, target_month)
            }
            Some(GoalType::Other(code)) => {
                trace!(goal_type = %code, "no monthly projection for goal type");
                Milliunits::zero()
            }
        };

        GoalProjection {
            goal_target,
            monthly_goal_target,
        }
    }

    /// Months left before `target_month`, not counting the current one
    ///
    /// Negative once the target month has passed.
    pub fn remaining_months(&self, target_month: YearMonth) -> i64 {
        self.current_month.months_until(target_month)
    }

    fn amortize_by_date(
        &self,
        goal_target: Milliunits,
        balance: Milliunits,
        budgeted: Milliunits,
        target_month: Option<YearMonth>,
    ) -> Milliunits {
        let Some(target_month) = target_month else {
            return Milliunits::zero();
        };

        let remaining_months = self.remaining_months(target_month);
        if remaining_months < 0 {
            return Milliunits::zero();
        }

        // The current month counts as a contribution period, so a goal due
        // this month divides by one.
        let share = goal_target
            .checked_sub(balance)
            .and_then(|r| r.checked_add(budgeted))
            .and_then(|r| r.checked_div(remaining_months + 1));

        share.unwrap_or_else(|| {
            warn!(
                goal_target = goal_target.value(),
                balance = balance.value(),
                budgeted = budgeted.value(),
                "goal amounts overflow, publishing zero monthly target"
            );
            Milliunits::zero()
        })
    }
}
