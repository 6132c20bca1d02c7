//! Budget model
//!
//! A budget is the unit the exporter iterates over: one name, its category
//! groups and its categories, fetched fresh for every collection cycle.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryGroup};
use super::ids::BudgetId;

/// A named container of category groups and categories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub id: BudgetId,

    /// Budget name, used as the `budget_name` label
    pub name: String,

    #[serde(default)]
    pub category_groups: Vec<CategoryGroup>,

    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Budget {
    /// Create an empty budget
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add a category group
    pub fn with_group(mut self, group: CategoryGroup) -> Self {
        self.category_groups.push(group);
        self
    }

    /// Add a category
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Categories that take part in metric emission, in snapshot order
    pub fn active_categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.is_active())
    }
}

/// A point-in-time snapshot of every budget, as read from a source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_categories_skip_deleted() {
        let mut deleted = Category::new("Old", "g1");
        deleted.deleted = true;

        let budget = Budget::new("Household")
            .with_group(CategoryGroup::new("g1", "Bills"))
            .with_category(Category::new("Rent", "g1"))
            .with_category(deleted)
            .with_category(Category::new("Power", "g1"));

        let names: Vec<&str> = budget
            .active_categories()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Rent", "Power"]);
    }

    #[test]
    fn test_snapshot_deserialize() {
        let json = r#"{
            "budgets": [
                {
                    "name": "Household",
                    "category_groups": [{"id": "g1", "name": "Bills"}],
                    "categories": [
                        {"category_group_id": "g1", "name": "Rent", "budgeted": 150000}
                    ]
                },
                {"name": "Empty"}
            ]
        }"#;

        let snapshot: BudgetSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.budgets.len(), 2);
        assert_eq!(snapshot.budgets[0].categories[0].budgeted.value(), 150_000);
        assert!(snapshot.budgets[1].categories.is_empty());
    }
}
