use anyhow::Result;
use shared::{config::ConnectionPool, domain::TransactionCategory};

use crate::di::DependenciesInject;

#[derive(Clone)]
pub struct AppState {
    pub category: TransactionCategory,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(db: ConnectionPool, category: TransactionCategory) -> Result<Self> {
        let di_container = DependenciesInject::new(db, category).await?;

        Ok(Self {
            category,
            di_container,
        })
    }
}
