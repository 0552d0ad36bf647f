use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::transaction::service::DynTransactionLookupService,
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

/// The single read endpoint of a lookup instance. Which category segment it
/// answers on (`/success`, `/failure` or `/pending`) is decided by the
/// instance's configuration at route-registration time.
#[utoipa::path(
    get,
    path = "/{category}/{account_number}",
    tag = "Transaction",
    params(
        ("category" = String, Path, description = "Category segment, fixed per deployed instance"),
        ("account_number" = String, Path, description = "Account number to look up")
    ),
    responses(
        (status = 200, description = "Transactions of this category for the account"),
        (status = 400, description = "Blank or unknown account number", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_transactions_by_account(
    Extension(service): Extension<DynTransactionLookupService>,
    Path(account_number): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_account(&account_number).await?;
    Ok(Json(response))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let path = format!("/{}/{{account_number}}", app_state.category.path_segment());

    OpenApiRouter::new()
        .route(&path, get(get_transactions_by_account))
        .layer(Extension(app_state.di_container.transaction_lookup.clone()))
}
