use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::{domain::TransactionCategory, model::transaction::TransactionModel};

/// Wire shape of a single transaction. Field-for-field from the store row;
/// amount and date stay opaque strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub transaction_id: String,
    pub status: String,
    pub amount: String,
    pub date: String,
}

// model to response, identity transform
impl From<TransactionModel> for TransactionResponse {
    fn from(value: TransactionModel) -> Self {
        TransactionResponse {
            transaction_id: value.transaction_id,
            status: value.status,
            amount: value.amount,
            date: value.date,
        }
    }
}

/// Response of one lookup service: `{"accountNumber": ..., "<category>": [...]}`
/// where the list key is the category's own name. One composed type instead
/// of three per-category wrappers; the key is picked at serialization time.
#[derive(Debug, Clone)]
pub struct CategoryTransactionsResponse {
    pub account_number: String,
    pub category: TransactionCategory,
    pub transactions: Vec<TransactionResponse>,
}

impl Serialize for CategoryTransactionsResponse {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("accountNumber", &self.account_number)?;
        map.serialize_entry(self.category.field_name(), &self.transactions)?;
        map.end()
    }
}

/// Decode-side view of a lookup response. Each instance carries exactly one
/// of the three list fields; the absent ones default to empty so one payload
/// type covers all three backends.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTransactionsPayload {
    pub account_number: String,
    #[serde(default)]
    pub success: Vec<TransactionResponse>,
    #[serde(default)]
    pub failure: Vec<TransactionResponse>,
    #[serde(default)]
    pub pending: Vec<TransactionResponse>,
}

impl CategoryTransactionsPayload {
    pub fn into_transactions(self, category: TransactionCategory) -> Vec<TransactionResponse> {
        match category {
            TransactionCategory::Success => self.success,
            TransactionCategory::Failure => self.failure,
            TransactionCategory::Pending => self.pending,
        }
    }
}

/// The merged view across all three categories for one account. Built once
/// per consolidation request; lists the request did not ask for stay empty,
/// never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConsolidatedTransactionsResponse {
    #[serde(default)]
    pub success: Vec<TransactionResponse>,
    #[serde(default)]
    pub failure: Vec<TransactionResponse>,
    #[serde(default)]
    pub pending: Vec<TransactionResponse>,
}

impl ConsolidatedTransactionsResponse {
    /// Writes a completed fetch into its fixed slot. Merging by slot, not by
    /// append, keeps the payload independent of completion order.
    pub fn set(&mut self, category: TransactionCategory, transactions: Vec<TransactionResponse>) {
        match category {
            TransactionCategory::Success => self.success = transactions,
            TransactionCategory::Failure => self.failure = transactions,
            TransactionCategory::Pending => self.pending = transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> TransactionResponse {
        TransactionResponse {
            transaction_id: "123".to_string(),
            status: "success".to_string(),
            amount: "500".to_string(),
            date: "30-05-2023".to_string(),
        }
    }

    #[test]
    fn transaction_uses_camel_case_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "transactionId": "123",
                "status": "success",
                "amount": "500",
                "date": "30-05-2023"
            })
        );
    }

    #[test]
    fn model_to_response_is_identity() {
        let model = TransactionModel {
            id: 1,
            transaction_id: "456".to_string(),
            status: "pending".to_string(),
            amount: "100".to_string(),
            date: "31-05-2023".to_string(),
            account_number: "123456789".to_string(),
        };
        let response = TransactionResponse::from(model.clone());
        assert_eq!(response.transaction_id, model.transaction_id);
        assert_eq!(response.status, model.status);
        assert_eq!(response.amount, model.amount);
        assert_eq!(response.date, model.date);
    }

    #[test]
    fn category_response_carries_only_its_own_key() {
        let response = CategoryTransactionsResponse {
            account_number: "123456789".to_string(),
            category: TransactionCategory::Failure,
            transactions: vec![sample()],
        };
        let value = serde_json::to_value(&response).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["accountNumber"], "123456789");
        assert!(object.contains_key("failure"));
        assert!(!object.contains_key("success"));
        assert!(!object.contains_key("pending"));
    }

    #[test]
    fn payload_round_trips_through_category_response() {
        let response = CategoryTransactionsResponse {
            account_number: "123456789".to_string(),
            category: TransactionCategory::Success,
            transactions: vec![sample()],
        };
        let body = serde_json::to_string(&response).unwrap();
        let payload: CategoryTransactionsPayload = serde_json::from_str(&body).unwrap();
        assert_eq!(payload.account_number, "123456789");
        assert_eq!(
            payload.into_transactions(TransactionCategory::Success),
            vec![sample()]
        );
    }

    #[test]
    fn consolidated_defaults_to_empty_lists() {
        let value = serde_json::to_value(ConsolidatedTransactionsResponse::default()).unwrap();
        assert_eq!(
            value,
            json!({ "success": [], "failure": [], "pending": [] })
        );
    }

    #[test]
    fn set_targets_the_fixed_slot() {
        let mut consolidated = ConsolidatedTransactionsResponse::default();
        consolidated.set(TransactionCategory::Pending, vec![sample()]);
        assert!(consolidated.success.is_empty());
        assert!(consolidated.failure.is_empty());
        assert_eq!(consolidated.pending, vec![sample()]);
    }
}
