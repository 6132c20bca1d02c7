//! Category group name lookup
//!
//! Categories only carry a group id. Metrics are labeled with the group's
//! display name, resolved through a per-budget lookup table.

use std::collections::HashMap;

use crate::models::{CategoryGroup, CategoryGroupId};

/// Group id to group display name, scoped to one budget
#[derive(Debug, Clone, Default)]
pub struct GroupNames {
    names: HashMap<CategoryGroupId, String>,
}

impl GroupNames {
    /// Build the lookup from a budget's groups
    ///
    /// Ids are expected to be unique; if they are not, the later group wins.
    pub fn from_groups(groups: &[CategoryGroup]) -> Self {
        let names = groups
            .iter()
            .map(|g| (g.id.clone(), g.name.clone()))
            .collect();
        Self { names }
    }

    /// Display name for `id`, or the empty string for an unknown id
    pub fn name_of(&self, id: &CategoryGroupId) -> &str {
        self.names.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
