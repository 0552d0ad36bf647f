use std::str::FromStr;

use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{domain::TransactionCategory, errors::ServiceError};

#[derive(Debug, Deserialize, Validate, Clone)]
pub struct FindCategoryTransactions {
    #[validate(length(min = 1, message = "Account number cannot be null or empty"))]
    pub account_number: String,
}

/// Query parameters of the consolidated endpoint. The status is kept as a
/// raw string here; the aggregator parses it so that a malformed value fails
/// before any remote call is dispatched.
#[derive(Debug, Deserialize, IntoParams, Clone)]
pub struct ConsolidateTransactionsQuery {
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "ALL".to_string()
}

/// Which categories a consolidation request asks for. Parsed
/// case-insensitively; anything outside the four known values is an
/// invalid request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Success,
    Failure,
    Pending,
}

impl StatusFilter {
    /// The categories to query for this filter. `All` fans out to every
    /// backend; a specific status queries only its own.
    pub fn categories(&self) -> &'static [TransactionCategory] {
        match self {
            StatusFilter::All => &TransactionCategory::ALL,
            StatusFilter::Success => &[TransactionCategory::Success],
            StatusFilter::Failure => &[TransactionCategory::Failure],
            StatusFilter::Pending => &[TransactionCategory::Pending],
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(StatusFilter::All),
            "SUCCESS" => Ok(StatusFilter::Success),
            "FAILURE" => Ok(StatusFilter::Failure),
            "PENDING" => Ok(StatusFilter::Pending),
            other => Err(ServiceError::InvalidRequest(format!(
                "invalid status '{other}', expected ALL, SUCCESS, FAILURE or PENDING"
            ))),
        }
    }
}
