use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored transaction row. Amount and date are kept as opaque strings,
/// preserved verbatim from the store.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransactionModel {
    pub id: i64,
    pub transaction_id: String,
    pub status: String,
    pub amount: String,
    pub date: String,
    pub account_number: String,
}
