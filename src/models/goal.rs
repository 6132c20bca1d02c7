//! Goal type model
//!
//! The budgeting service tags each category goal with a short code. Only two
//! codes drive an amortization policy; the rest are carried through verbatim
//! so they can be logged and matched on explicitly.

use serde::{Deserialize, Serialize};

/// How a category's goal target is interpreted
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GoalType {
    /// `MF`: the goal target is itself a recurring monthly amount
    MonthlyFunding,
    /// `TBD`: reach the goal target balance by the goal target month
    TargetBalanceByDate,
    /// Any other tag (`TB`, `NEED`, `DEBT`, ...)
    Other(String),
}

impl GoalType {
    /// The wire code for this goal type
    pub fn code(&self) -> &str {
        match self {
            Self::MonthlyFunding => "MF",
            Self::TargetBalanceByDate => "TBD",
            Self::Other(code) => code,
        }
    }
}

impl From<String> for GoalType {
    fn from(code: String) -> Self {
        match code.as_str() {
            "MF" => Self::MonthlyFunding,
            "TBD" => Self::TargetBalanceByDate,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for GoalType {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<GoalType> for String {
    fn from(goal_type: GoalType) -> Self {
        goal_type.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(GoalType::from("MF"), GoalType::MonthlyFunding);
        assert_eq!(GoalType::from("TBD"), GoalType::TargetBalanceByDate);
        assert_eq!(GoalType::from("TB"), GoalType::Other("TB".into()));
        assert_eq!(GoalType::from("NEED"), GoalType::Other("NEED".into()));
    }

    #[test]
    fn test_code_round_trips_unknown_tags() {
        assert_eq!(GoalType::from("DEBT").code(), "DEBT");
        assert_eq!(GoalType::MonthlyFunding.code(), "MF");
    }

    #[test]
    fn test_serialization() {
        let parsed: Option<GoalType> = serde_json::from_str("\"TBD\"").unwrap();
        assert_eq!(parsed, Some(GoalType::TargetBalanceByDate));

        let parsed: Option<GoalType> = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, None);

        let json = serde_json::to_string(&GoalType::Other("NEED".into())).unwrap();
        assert_eq!(json, "\"NEED\"");
    }
}
