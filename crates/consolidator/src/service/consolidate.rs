use async_trait::async_trait;
use shared::{
    abstract_trait::transaction::{
        http::DynTransactionBackendClient, service::ConsolidatedTransactionServiceTrait,
    },
    domain::{
        TransactionCategory,
        requests::StatusFilter,
        responses::{ConsolidatedTransactionsResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use tokio::task::JoinHandle;
use tracing::{error, instrument};

/// The concurrent fan-out/aggregation core. Selects the backend clients the
/// status filter asks for, dispatches one task per fetch, waits for all of
/// them (join-all, no early cancellation) and merges the completed lists
/// into fixed slots of the consolidated payload.
pub struct ConsolidatedTransactionService {
    success: DynTransactionBackendClient,
    failure: DynTransactionBackendClient,
    pending: DynTransactionBackendClient,
}

impl ConsolidatedTransactionService {
    pub fn new(
        success: DynTransactionBackendClient,
        failure: DynTransactionBackendClient,
        pending: DynTransactionBackendClient,
    ) -> Self {
        Self {
            success,
            failure,
            pending,
        }
    }

    fn client_for(&self, category: TransactionCategory) -> &DynTransactionBackendClient {
        match category {
            TransactionCategory::Success => &self.success,
            TransactionCategory::Failure => &self.failure,
            TransactionCategory::Pending => &self.pending,
        }
    }

    fn spawn_fetch(
        &self,
        category: TransactionCategory,
        account_number: &str,
    ) -> JoinHandle<Result<Vec<TransactionResponse>, ServiceError>> {
        let client = self.client_for(category).clone();
        let account_number = account_number.to_string();
        tokio::spawn(async move { client.fetch(&account_number).await })
    }
}

#[async_trait]
impl ConsolidatedTransactionServiceTrait for ConsolidatedTransactionService {
    #[instrument(skip(self), level = "info")]
    async fn consolidate(
        &self,
        account_number: &str,
        status: &str,
    ) -> Result<ConsolidatedTransactionsResponse, ServiceError> {
        // Parsed before any dispatch: a malformed filter must fail with
        // zero remote calls issued.
        let filter: StatusFilter = status.parse()?;

        let handles: Vec<(TransactionCategory, _)> = filter
            .categories()
            .iter()
            .map(|category| (*category, self.spawn_fetch(*category, account_number)))
            .collect();

        // Join-all: every dispatched task is awaited before the first
        // error, if any, is returned. No partial payload ever leaves here.
        let mut consolidated = ConsolidatedTransactionsResponse::default();
        let mut first_error: Option<ServiceError> = None;

        for (category, handle) in handles {
            match handle.await {
                Ok(Ok(transactions)) => consolidated.set(category, transactions),
                Ok(Err(err)) => {
                    error!("{category} fetch failed: {err}");
                    first_error.get_or_insert(err);
                }
                Err(err) => {
                    error!("{category} fetch task aborted: {err}");
                    first_error.get_or_insert(ServiceError::Internal(err.to_string()));
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(consolidated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::abstract_trait::transaction::http::TransactionBackendClientTrait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct MockBackendClient {
        transactions: Vec<TransactionResponse>,
        fail: bool,
        delay: Option<Duration>,
        calls: Arc<AtomicUsize>,
    }

    impl MockBackendClient {
        fn returning(transactions: Vec<TransactionResponse>) -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    transactions,
                    fail: false,
                    delay: None,
                    calls: calls.clone(),
                },
                calls,
            )
        }

        fn failing() -> (Self, Arc<AtomicUsize>) {
            let calls = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    transactions: vec![],
                    fail: true,
                    delay: None,
                    calls: calls.clone(),
                },
                calls,
            )
        }
    }

    #[async_trait]
    impl TransactionBackendClientTrait for MockBackendClient {
        async fn fetch(
            &self,
            _account_number: &str,
        ) -> Result<Vec<TransactionResponse>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            if self.fail {
                return Err(ServiceError::Internal("backend unreachable".to_string()));
            }
            Ok(self.transactions.clone())
        }
    }

    fn transaction(id: &str, status: &str) -> TransactionResponse {
        TransactionResponse {
            transaction_id: id.to_string(),
            status: status.to_string(),
            amount: "500".to_string(),
            date: "30-05-2023".to_string(),
        }
    }

    #[tokio::test]
    async fn all_filter_merges_each_category_into_its_slot() {
        let (success, _) = MockBackendClient::returning(vec![
            transaction("123", "success"),
            transaction("456", "success"),
        ]);
        let (failure, _) = MockBackendClient::returning(vec![]);
        let (pending, _) = MockBackendClient::returning(vec![transaction("789", "pending")]);

        let service = ConsolidatedTransactionService::new(
            Arc::new(success),
            Arc::new(failure),
            Arc::new(pending),
        );

        let result = service.consolidate("123456789", "ALL").await.unwrap();
        assert_eq!(result.success.len(), 2);
        assert_eq!(result.success[0].transaction_id, "123");
        assert_eq!(result.success[1].transaction_id, "456");
        assert!(result.failure.is_empty());
        assert_eq!(result.pending.len(), 1);
    }

    #[tokio::test]
    async fn merge_is_independent_of_completion_order() {
        let calls = Arc::new(AtomicUsize::new(0));
        let success = MockBackendClient {
            transactions: vec![transaction("123", "success")],
            fail: false,
            delay: Some(Duration::from_millis(30)),
            calls: calls.clone(),
        };
        let (failure, _) = MockBackendClient::returning(vec![transaction("f-1", "failure")]);
        let (pending, _) = MockBackendClient::returning(vec![transaction("p-1", "pending")]);

        let service = ConsolidatedTransactionService::new(
            Arc::new(success),
            Arc::new(failure),
            Arc::new(pending),
        );

        let result = service.consolidate("123456789", "ALL").await.unwrap();
        assert_eq!(result.success[0].transaction_id, "123");
        assert_eq!(result.failure[0].transaction_id, "f-1");
        assert_eq!(result.pending[0].transaction_id, "p-1");
    }

    #[tokio::test]
    async fn specific_filter_dispatches_only_its_own_backend() {
        let (success, success_calls) = MockBackendClient::returning(vec![]);
        let (failure, failure_calls) =
            MockBackendClient::returning(vec![transaction("f-1", "failure")]);
        let (pending, pending_calls) = MockBackendClient::returning(vec![]);

        let service = ConsolidatedTransactionService::new(
            Arc::new(success),
            Arc::new(failure),
            Arc::new(pending),
        );

        let result = service.consolidate("123456789", "failure").await.unwrap();
        assert!(result.success.is_empty());
        assert_eq!(result.failure.len(), 1);
        assert!(result.pending.is_empty());

        assert_eq!(success_calls.load(Ordering::SeqCst), 0);
        assert_eq!(failure_calls.load(Ordering::SeqCst), 1);
        assert_eq!(pending_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_status_fails_without_dispatching_any_call() {
        let (success, success_calls) = MockBackendClient::returning(vec![]);
        let (failure, failure_calls) = MockBackendClient::returning(vec![]);
        let (pending, pending_calls) = MockBackendClient::returning(vec![]);

        let service = ConsolidatedTransactionService::new(
            Arc::new(success),
            Arc::new(failure),
            Arc::new(pending),
        );

        let err = service
            .consolidate("123456789", "REFUNDED")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidRequest(_)));

        assert_eq!(success_calls.load(Ordering::SeqCst), 0);
        assert_eq!(failure_calls.load(Ordering::SeqCst), 0);
        assert_eq!(pending_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn one_failed_backend_fails_the_whole_aggregate() {
        let (success, _) = MockBackendClient::returning(vec![transaction("123", "success")]);
        let (failure, _) = MockBackendClient::failing();
        let (pending, pending_calls) = MockBackendClient::returning(vec![]);

        let service = ConsolidatedTransactionService::new(
            Arc::new(success),
            Arc::new(failure),
            Arc::new(pending),
        );

        let err = service.consolidate("123456789", "ALL").await.unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));

        // all three were dispatched; the failure did not cancel the others
        assert_eq!(pending_calls.load(Ordering::SeqCst), 1);
    }
}
