use async_trait::async_trait;
use std::sync::Arc;

use crate::{domain::responses::TransactionResponse, errors::ServiceError};

pub type DynTransactionBackendClient = Arc<dyn TransactionBackendClientTrait + Send + Sync>;

/// Thin remote-call wrapper around one lookup service: a single GET,
/// decoded into the normalized transaction list of that service's category.
#[async_trait]
pub trait TransactionBackendClientTrait {
    async fn fetch(&self, account_number: &str)
    -> Result<Vec<TransactionResponse>, ServiceError>;
}
