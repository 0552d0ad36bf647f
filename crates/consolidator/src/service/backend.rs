use async_trait::async_trait;
use reqwest::Client;
use shared::{
    abstract_trait::transaction::http::TransactionBackendClientTrait,
    domain::{
        TransactionCategory,
        responses::{CategoryTransactionsPayload, TransactionResponse},
    },
    errors::ServiceError,
};
use tracing::{info, instrument};

/// HTTP client for one lookup service. One GET per fetch against the fixed
/// base URL, decoded into the category's payload shape; transport errors,
/// non-2xx statuses and undecodable bodies all surface as one remote-call
/// failure. No retries, no per-call timeout override.
pub struct TransactionBackendClient {
    client: Client,
    base_url: String,
    category: TransactionCategory,
}

impl TransactionBackendClient {
    pub fn new(client: Client, base_url: String, category: TransactionCategory) -> Self {
        Self {
            client,
            base_url,
            category,
        }
    }
}

#[async_trait]
impl TransactionBackendClientTrait for TransactionBackendClient {
    #[instrument(skip(self), level = "info", fields(category = %self.category))]
    async fn fetch(
        &self,
        account_number: &str,
    ) -> Result<Vec<TransactionResponse>, ServiceError> {
        let url = format!(
            "{}/{}/{}",
            self.base_url,
            self.category.path_segment(),
            account_number
        );

        let payload = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<CategoryTransactionsPayload>()
            .await?;

        let transactions = payload.into_transactions(self.category);
        info!(
            "fetched {} {} transactions for account {account_number}",
            transactions.len(),
            self.category
        );

        Ok(transactions)
    }
}
