use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::responses::{CategoryTransactionsResponse, ConsolidatedTransactionsResponse},
    errors::ServiceError,
};

pub type DynTransactionLookupService = Arc<dyn TransactionLookupServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionLookupServiceTrait {
    /// Validates the account number, checks it is known to the store and
    /// returns all of its transactions of this service's category.
    async fn find_by_account(
        &self,
        account_number: &str,
    ) -> Result<CategoryTransactionsResponse, ServiceError>;
}

pub type DynConsolidatedTransactionService =
    Arc<dyn ConsolidatedTransactionServiceTrait + Send + Sync>;

#[async_trait]
pub trait ConsolidatedTransactionServiceTrait {
    /// Fans out to the backend lookup services selected by `status`
    /// (raw, case-insensitive), waits for every dispatched fetch and
    /// merges the results. Any single failure fails the whole aggregate.
    async fn consolidate(
        &self,
        account_number: &str,
        status: &str,
    ) -> Result<ConsolidatedTransactionsResponse, ServiceError>;
}
