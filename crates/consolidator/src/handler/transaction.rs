use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::transaction::service::DynConsolidatedTransactionService,
    domain::{requests::ConsolidateTransactionsQuery, responses::ConsolidatedTransactionsResponse},
    errors::AppErrorConsolidated,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// Consolidated view across the three backends. Validation of the account
/// number happens downstream in the lookup services; every failure, the
/// malformed status filter included, collapses to a bare 500 here.
#[utoipa::path(
    get,
    path = "/transactions/{account_number}",
    tag = "Transaction",
    params(
        ("account_number" = String, Path, description = "Account number to consolidate"),
        ConsolidateTransactionsQuery
    ),
    responses(
        (status = 200, description = "Consolidated transactions", body = ConsolidatedTransactionsResponse),
        (status = 500, description = "Invalid status or any downstream failure")
    )
)]
pub async fn get_consolidated_transactions(
    Extension(service): Extension<DynConsolidatedTransactionService>,
    Path(account_number): Path<String>,
    Query(params): Query<ConsolidateTransactionsQuery>,
) -> Result<impl IntoResponse, AppErrorConsolidated> {
    let response = service.consolidate(&account_number, &params.status).await?;
    Ok(Json(response))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/transactions/{account_number}",
            get(get_consolidated_transactions),
        )
        .layer(Extension(app_state.di_container.consolidated.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::{Router, body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use shared::{
        abstract_trait::transaction::service::ConsolidatedTransactionServiceTrait,
        domain::responses::TransactionResponse, errors::ServiceError,
    };
    use tower::ServiceExt;

    struct MockConsolidatedService {
        fail: bool,
    }

    #[async_trait]
    impl ConsolidatedTransactionServiceTrait for MockConsolidatedService {
        async fn consolidate(
            &self,
            _account_number: &str,
            status: &str,
        ) -> Result<ConsolidatedTransactionsResponse, ServiceError> {
            if self.fail {
                return Err(ServiceError::Internal("backend unreachable".to_string()));
            }
            assert_eq!(status, "ALL");
            Ok(ConsolidatedTransactionsResponse {
                success: vec![TransactionResponse {
                    transaction_id: "123".to_string(),
                    status: "success".to_string(),
                    amount: "500".to_string(),
                    date: "30-05-2023".to_string(),
                }],
                failure: vec![],
                pending: vec![],
            })
        }
    }

    fn test_router(fail: bool) -> Router {
        let service =
            Arc::new(MockConsolidatedService { fail }) as DynConsolidatedTransactionService;

        Router::new()
            .route(
                "/transactions/{account_number}",
                get(get_consolidated_transactions),
            )
            .layer(Extension(service))
    }

    #[tokio::test]
    async fn missing_status_defaults_to_all_and_returns_payload() {
        let response = test_router(false)
            .oneshot(
                Request::builder()
                    .uri("/transactions/123456789")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"][0]["transactionId"], "123");
        assert_eq!(value["failure"], serde_json::json!([]));
        assert_eq!(value["pending"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn downstream_failure_returns_bare_500() {
        let response = test_router(true)
            .oneshot(
                Request::builder()
                    .uri("/transactions/999999999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
