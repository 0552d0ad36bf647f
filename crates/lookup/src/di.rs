use anyhow::Result;
use shared::{
    abstract_trait::transaction::{
        repository::DynTransactionQueryRepository, service::DynTransactionLookupService,
    },
    config::ConnectionPool,
    domain::TransactionCategory,
    repository::transaction::TransactionQueryRepository,
    service::transaction::TransactionLookupService,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub transaction_query_repo: DynTransactionQueryRepository,
    pub transaction_lookup: DynTransactionLookupService,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool, category: TransactionCategory) -> Result<Self> {
        let transaction_query_repo = Arc::new(TransactionQueryRepository::new(db, category))
            as DynTransactionQueryRepository;
        let transaction_lookup = Arc::new(TransactionLookupService::new(
            transaction_query_repo.clone(),
            category,
        )) as DynTransactionLookupService;

        Ok(Self {
            transaction_query_repo,
            transaction_lookup,
        })
    }
}
