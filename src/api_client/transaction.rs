use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::api_client;
use crate::api_client::dashboard;

/// Income vs. expense marker. The wire field is named `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

/// Transaction response model. Amounts are unsigned; the kind carries
/// the direction.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub user_id: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub description: Option<String>,
    pub date: NaiveDateTime,
}

/// Request body for logging a transaction. The server assigns id, owner,
/// and date, so the body carries only the user-entered fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub description: Option<String>,
}

/// Get all transactions for the signed-in user
pub async fn get_transactions() -> Result<Vec<Transaction>, String> {
    log::trace!("Fetching all transactions");
    let result = api_client::get::<Vec<Transaction>>("/transactions").await;
    match &result {
        Ok(transactions) => log::info!("Fetched {} transactions", transactions.len()),
        Err(e) => log::error!("Failed to fetch transactions: {}", e),
    }
    result
}

/// Log a new transaction
pub async fn create_transaction(request: NewTransaction) -> Result<Transaction, String> {
    log::debug!(
        "Creating {} transaction in category '{}'",
        request.kind.label(),
        request.category
    );
    let result = api_client::post::<Transaction, _>("/transactions", &request).await;
    match &result {
        Ok(transaction) => {
            log::info!("Created transaction (ID: {})", transaction.id);
            // The server-side aggregate is stale now
            dashboard::invalidate_summary();
        }
        Err(e) => log::error!("Failed to create transaction: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn create_body_carries_only_user_fields() {
        let request = NewTransaction {
            amount: Decimal::from_str("500").unwrap(),
            kind: TransactionKind::Expense,
            category: "Food".to_string(),
            description: None,
        };

        let body = serde_json::to_value(&request).unwrap();
        let keys: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
        // serde_json orders object keys alphabetically
        assert_eq!(keys, ["amount", "category", "description", "type"]);
        assert_eq!(body["type"], "expense");
        assert_eq!(body["category"], "Food");
        // id, user, and date belong to the server
        assert!(body.get("id").is_none());
        assert!(body.get("user_id").is_none());
        assert!(body.get("date").is_none());
    }

    #[test]
    fn kind_round_trips_through_wire_names() {
        assert_eq!(
            serde_json::to_string(&TransactionKind::Income).unwrap(),
            "\"income\""
        );
        let parsed: TransactionKind = serde_json::from_str("\"expense\"").unwrap();
        assert_eq!(parsed, TransactionKind::Expense);
    }

    #[test]
    fn response_parses_server_record() {
        let raw = r#"{
            "id": "665f1c2e9b3d2a0012345678",
            "user_id": "665f1c2e9b3d2a0012345679",
            "amount": 1250.5,
            "type": "income",
            "category": "Salary",
            "description": null,
            "date": "2026-08-01T09:30:00"
        }"#;
        let transaction: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(transaction.kind, TransactionKind::Income);
        assert_eq!(transaction.amount, Decimal::from_str("1250.5").unwrap());
        assert!(transaction.description.is_none());
    }
}
