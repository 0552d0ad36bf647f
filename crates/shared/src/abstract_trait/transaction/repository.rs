use async_trait::async_trait;
use std::sync::Arc;

use crate::{errors::RepositoryError, model::transaction::TransactionModel};

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    /// Whether the account is known to this store at all.
    async fn exists_by_account(&self, account_number: &str) -> Result<bool, RepositoryError>;

    /// All rows of this store's category for the account, in insertion
    /// order.
    async fn find_by_account(
        &self,
        account_number: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
}
