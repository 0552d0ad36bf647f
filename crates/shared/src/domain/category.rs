use std::fmt;
use std::str::FromStr;

use crate::errors::ServiceError;

/// The three transaction categories, each served by its own backend store.
///
/// The category parameterizes everything the three structurally identical
/// lookup services differ in: the route path segment, the store table name
/// and the response field carrying the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionCategory {
    Success,
    Failure,
    Pending,
}

impl TransactionCategory {
    pub const ALL: [TransactionCategory; 3] = [
        TransactionCategory::Success,
        TransactionCategory::Failure,
        TransactionCategory::Pending,
    ];

    /// Path segment of the lookup endpoint, e.g. `/success/{account_number}`.
    pub fn path_segment(&self) -> &'static str {
        self.field_name()
    }

    /// JSON key carrying the transaction list in the lookup response.
    pub fn field_name(&self) -> &'static str {
        match self {
            TransactionCategory::Success => "success",
            TransactionCategory::Failure => "failure",
            TransactionCategory::Pending => "pending",
        }
    }

    /// Store table holding this category's rows.
    pub fn table(&self) -> &'static str {
        match self {
            TransactionCategory::Success => "transaction_success",
            TransactionCategory::Failure => "transaction_failure",
            TransactionCategory::Pending => "transaction_pending",
        }
    }
}

impl fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for TransactionCategory {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "success" => Ok(TransactionCategory::Success),
            "failure" => Ok(TransactionCategory::Failure),
            "pending" => Ok(TransactionCategory::Pending),
            other => Err(ServiceError::InvalidRequest(format!(
                "unknown transaction category '{other}'"
            ))),
        }
    }
}
