use async_trait::async_trait;
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    abstract_trait::transaction::{
        repository::DynTransactionQueryRepository, service::TransactionLookupServiceTrait,
    },
    domain::{
        TransactionCategory, requests::FindCategoryTransactions,
        responses::CategoryTransactionsResponse,
    },
    errors::{ServiceError, format_validation_errors},
};

/// The parameterized lookup service: validates the account number, checks
/// it is known to the store and lists this category's rows. One
/// implementation, instantiated once per category by deployment.
pub struct TransactionLookupService {
    repository: DynTransactionQueryRepository,
    category: TransactionCategory,
}

impl TransactionLookupService {
    pub fn new(repository: DynTransactionQueryRepository, category: TransactionCategory) -> Self {
        Self {
            repository,
            category,
        }
    }
}

#[async_trait]
impl TransactionLookupServiceTrait for TransactionLookupService {
    #[instrument(skip(self), level = "info")]
    async fn find_by_account(
        &self,
        account_number: &str,
    ) -> Result<CategoryTransactionsResponse, ServiceError> {
        let request = FindCategoryTransactions {
            account_number: account_number.trim().to_string(),
        };
        request
            .validate()
            .map_err(|e| ServiceError::InvalidRequest(format_validation_errors(&e)))?;

        // Unknown account and known-with-zero-rows are distinct outcomes:
        // the former is a client error, the latter an empty list.
        if !self.repository.exists_by_account(account_number).await? {
            return Err(ServiceError::InvalidRequest(
                "Account number does not exist in the database".to_string(),
            ));
        }

        let rows = self.repository.find_by_account(account_number).await?;

        info!(
            "found {} {} transactions for account {account_number}",
            rows.len(),
            self.category
        );

        Ok(CategoryTransactionsResponse {
            account_number: account_number.to_string(),
            category: self.category,
            transactions: rows.into_iter().map(Into::into).collect(),
        })
    }
}
