//! Category metric display formatting
//!
//! Renders a cycle's derived figures as a plain-text table, one row per
//! published label triple.

use crate::services::CategoryReading;

/// Format readings as a table grouped by budget
pub fn format_readings_table(readings: &[CategoryReading]) -> String {
    if readings.is_empty() {
        return "No categories found.".to_string();
    }

    let name_width = readings
        .iter()
        .map(|r| r.labels.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);
    let group_width = readings
        .iter()
        .map(|r| r.labels.group_name.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    let mut current_budget: Option<&str> = None;

    for reading in readings {
        if current_budget != Some(reading.labels.budget_name.as_str()) {
            if current_budget.is_some() {
                output.push('\n');
            }
            current_budget = Some(reading.labels.budget_name.as_str());

            output.push_str(&format!("Budget: {}\n", reading.labels.budget_name));
            output.push_str(&format!(
                "{:<gw$}  {:<nw$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}\n",
                "Group",
                "Category",
                "Budgeted",
                "Activity",
                "Balance",
                "Goal",
                "Monthly",
                gw = group_width,
                nw = name_width
            ));
            output.push_str(&format!(
                "{:-<gw$}  {:-<nw$}  {:->12}  {:->12}  {:->12}  {:->12}  {:->12}\n",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                gw = group_width,
                nw = name_width
            ));
        }

        let f = &reading.figures;
        output.push_str(&format!(
            "{:<gw$}  {:<nw$}  {:>12}  {:>12}  {:>12}  {:>12}  {:>12}\n",
            reading.labels.group_name,
            reading.labels.name,
            f.budgeted.to_string(),
            f.activity.to_string(),
            f.balance.to_string(),
            f.goal_target.to_string(),
            f.monthly_goal_target.to_string(),
            gw = group_width,
            nw = name_width
        ));
    }

    output
}
