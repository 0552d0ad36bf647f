use async_trait::async_trait;
use tracing::error;

use crate::{
    abstract_trait::transaction::repository::TransactionQueryRepositoryTrait,
    config::ConnectionPool, domain::TransactionCategory, errors::RepositoryError,
    model::transaction::TransactionModel,
};

#[derive(Clone)]
pub struct TransactionQueryRepository {
    db: ConnectionPool,
    category: TransactionCategory,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool, category: TransactionCategory) -> Self {
        Self { db, category }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn exists_by_account(&self, account_number: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM accounts WHERE account_number = $1)"#,
        )
        .bind(account_number)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("failed to check account existence: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(exists)
    }

    async fn find_by_account(
        &self,
        account_number: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        // Table name comes from the category enum, never from user input.
        let sql = format!(
            r#"
            SELECT id, transaction_id, status, amount, date, account_number
            FROM {}
            WHERE account_number = $1
            ORDER BY id ASC
            "#,
            self.category.table()
        );

        let rows = sqlx::query_as::<_, TransactionModel>(&sql)
            .bind(account_number)
            .fetch_all(&mut *conn)
            .await
            .map_err(|e| {
                error!(
                    "failed to fetch {} transactions for account {account_number}: {e:?}",
                    self.category
                );
                RepositoryError::from(e)
            })?;

        Ok(rows)
    }
}
