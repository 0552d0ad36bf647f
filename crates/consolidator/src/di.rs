use anyhow::{Context, Result};
use reqwest::Client;
use shared::{
    abstract_trait::transaction::{
        http::DynTransactionBackendClient, service::DynConsolidatedTransactionService,
    },
    config::ConsolidatorConfig,
    domain::TransactionCategory,
};
use std::sync::Arc;

use crate::service::{ConsolidatedTransactionService, TransactionBackendClient};

#[derive(Clone)]
pub struct DependenciesInject {
    pub consolidated: DynConsolidatedTransactionService,
}

impl DependenciesInject {
    pub fn new(config: &ConsolidatorConfig) -> Result<Self> {
        // One shared client handle; reqwest clones share the connection pool.
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        let success = Arc::new(TransactionBackendClient::new(
            client.clone(),
            config.success.base_url.clone(),
            TransactionCategory::Success,
        )) as DynTransactionBackendClient;
        let failure = Arc::new(TransactionBackendClient::new(
            client.clone(),
            config.failure.base_url.clone(),
            TransactionCategory::Failure,
        )) as DynTransactionBackendClient;
        let pending = Arc::new(TransactionBackendClient::new(
            client,
            config.pending.base_url.clone(),
            TransactionCategory::Pending,
        )) as DynTransactionBackendClient;

        let consolidated = Arc::new(ConsolidatedTransactionService::new(
            success, failure, pending,
        )) as DynConsolidatedTransactionService;

        Ok(Self { consolidated })
    }
}
