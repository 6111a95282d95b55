use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api_client;
use crate::api_client::dashboard;

/// Savings goal response model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Goal {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDateTime>,
    pub completed: bool,
}

impl Goal {
    /// Percentage of the target reached, clamped to 0..=100. Derived at
    /// render time, never stored.
    pub fn progress_percent(&self) -> u32 {
        progress_percent(self.current_amount, self.target_amount)
    }
}

pub fn progress_percent(current: Decimal, target: Decimal) -> u32 {
    if target <= Decimal::ZERO {
        return 0;
    }
    let ratio = (current / target) * Decimal::ONE_HUNDRED;
    ratio.round().to_i64().unwrap_or(0).clamp(0, 100) as u32
}

/// Request body for creating a goal. The server owns id, owner, and the
/// completed flag; starting amount and deadline travel only when the
/// user supplied them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

/// Get all goals for the signed-in user
pub async fn get_goals() -> Result<Vec<Goal>, String> {
    log::trace!("Fetching all goals");
    let result = api_client::get::<Vec<Goal>>("/goals").await;
    match &result {
        Ok(goals) => log::info!("Fetched {} goals", goals.len()),
        Err(e) => log::error!("Failed to fetch goals: {}", e),
    }
    result
}

/// Create a new savings goal
pub async fn create_goal(request: NewGoal) -> Result<Goal, String> {
    log::debug!("Creating goal: {}", request.name);
    let result = api_client::post::<Goal, _>("/goals", &request).await;
    match &result {
        Ok(goal) => {
            log::info!("Created goal: {} (ID: {})", goal.name, goal.id);
            dashboard::invalidate_summary();
        }
        Err(e) => log::error!("Failed to create goal '{}': {}", request.name, e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn progress_is_a_rounded_percentage() {
        assert_eq!(progress_percent(dec("50"), dec("200")), 25);
        assert_eq!(progress_percent(dec("1"), dec("3")), 33);
        assert_eq!(progress_percent(dec("2"), dec("3")), 67);
    }

    #[test]
    fn progress_clamps_at_one_hundred() {
        assert_eq!(progress_percent(dec("250"), dec("200")), 100);
        assert_eq!(progress_percent(dec("200"), dec("200")), 100);
    }

    #[test]
    fn progress_never_goes_negative_or_divides_by_zero() {
        assert_eq!(progress_percent(dec("-10"), dec("200")), 0);
        assert_eq!(progress_percent(dec("50"), Decimal::ZERO), 0);
        assert_eq!(progress_percent(dec("50"), dec("-200")), 0);
    }

    #[test]
    fn create_body_omits_unset_optionals() {
        let request = NewGoal {
            name: "Emergency fund".to_string(),
            target_amount: dec("100000"),
            current_amount: None,
            deadline: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "target_amount"]);
    }

    #[test]
    fn create_body_keeps_supplied_optionals() {
        let request = NewGoal {
            name: "Trip".to_string(),
            target_amount: dec("50000"),
            current_amount: Some(dec("5000")),
            deadline: Some(NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["deadline"], "2027-01-01");
        assert!(body.get("current_amount").is_some());
    }
}
