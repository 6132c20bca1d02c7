//! Category and CategoryGroup models
//!
//! Categories are organized into groups. A category refers to its group by
//! id only; the group name is looked up per budget when metrics are emitted.

use serde::{Deserialize, Serialize};

use super::goal::GoalType;
use super::ids::{CategoryGroupId, CategoryId};
use super::money::Milliunits;
use super::month::YearMonth;

/// A group of related categories (e.g., "Bills", "Savings")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Unique identifier within the budget
    pub id: CategoryGroupId,

    /// Group display name
    pub name: String,

    /// Whether this group is hidden in the budgeting service
    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub deleted: bool,
}

impl CategoryGroup {
    /// Create a new category group
    pub fn new(id: impl Into<CategoryGroupId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hidden: false,
            deleted: false,
        }
    }
}

/// A budget category as reported for the current month
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// The group this category belongs to
    #[serde(rename = "category_group_id")]
    pub group_id: CategoryGroupId,

    /// Amount assigned this month
    #[serde(default)]
    pub budgeted: Milliunits,

    /// Net spending this month
    #[serde(default)]
    pub activity: Milliunits,

    /// Available balance
    #[serde(default)]
    pub balance: Milliunits,

    /// Goal policy, absent when no goal is configured
    #[serde(default)]
    pub goal_type: Option<GoalType>,

    /// Goal amount, absent when no goal is configured
    #[serde(default)]
    pub goal_target: Option<Milliunits>,

    /// Month a by-date goal should be reached
    #[serde(default)]
    pub goal_target_month: Option<YearMonth>,

    #[serde(default)]
    pub hidden: bool,

    #[serde(default)]
    pub deleted: bool,
}

impl Category {
    /// Create a new category with zero amounts and no goal
    pub fn new(name: impl Into<String>, group_id: impl Into<CategoryGroupId>) -> Self {
        Self {
            id: CategoryId::default(),
            name: name.into(),
            group_id: group_id.into(),
            budgeted: Milliunits::zero(),
            activity: Milliunits::zero(),
            balance: Milliunits::zero(),
            goal_type: None,
            goal_target: None,
            goal_target_month: None,
            hidden: false,
            deleted: false,
        }
    }

    /// Set budgeted, activity and balance in one call
    pub fn with_amounts(mut self, budgeted: i64, activity: i64, balance: i64) -> Self {
        self.budgeted = Milliunits::new(budgeted);
        self.activity = Milliunits::new(activity);
        self.balance = Milliunits::new(balance);
        self
    }

    /// Attach a goal
    pub fn with_goal(
        mut self,
        goal_type: GoalType,
        target: i64,
        target_month: Option<YearMonth>,
    ) -> Self {
        self.goal_type = Some(goal_type);
        self.goal_target = Some(Milliunits::new(target));
        self.goal_target_month = target_month;
        self
    }

    /// Whether this category takes part in metric emission
    pub fn is_active(&self) -> bool {
        !self.deleted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("Rent", "g1");

        assert_eq!(category.name, "Rent");
        assert_eq!(category.group_id, CategoryGroupId::from("g1"));
        assert!(category.goal_target.is_none());
        assert!(category.goal_type.is_none());
        assert!(category.is_active());
    }

    #[test]
    fn test_builders() {
        let month = YearMonth::new(2024, 7);
        let category = Category::new("Vacation", "g2")
            .with_amounts(0, 0, 200_000)
            .with_goal(GoalType::TargetBalanceByDate, 1_200_000, month);

        assert_eq!(category.balance.value(), 200_000);
        assert_eq!(category.goal_target, Some(Milliunits::new(1_200_000)));
        assert_eq!(category.goal_type, Some(GoalType::TargetBalanceByDate));
        assert_eq!(category.goal_target_month, month);
    }

    #[test]
    fn test_deserialize_service_shape() {
        let json = r#"{
            "id": "c1",
            "category_group_id": "g1",
            "name": "Vacation",
            "hidden": false,
            "budgeted": 0,
            "activity": -2500,
            "balance": 200000,
            "goal_type": "TBD",
            "goal_target": 1200000,
            "goal_target_month": "2024-07-01",
            "goal_percentage_complete": 16,
            "deleted": false
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, CategoryId::from("c1"));
        assert_eq!(category.group_id, CategoryGroupId::from("g1"));
        assert_eq!(category.activity.value(), -2500);
        assert_eq!(category.goal_type, Some(GoalType::TargetBalanceByDate));
        assert_eq!(category.goal_target_month, YearMonth::new(2024, 7));
    }

    #[test]
    fn test_deserialize_without_goal() {
        let json = r#"{
            "category_group_id": "g1",
            "name": "Rent",
            "budgeted": 150000,
            "activity": -150000,
            "balance": 0,
            "goal_type": null,
            "goal_target": null,
            "goal_target_month": null
        }"#;

        let category: Category = serde_json::from_str(json).unwrap();
        assert!(category.goal_type.is_none());
        assert!(category.goal_target.is_none());
        assert!(!category.deleted);
    }

    #[test]
    fn test_group_deserialize_defaults() {
        let group: CategoryGroup = serde_json::from_str(r#"{"id":"g1","name":"Bills"}"#).unwrap();
        assert_eq!(group.name, "Bills");
        assert!(!group.hidden);
        assert!(!group.deleted);
    }
}
