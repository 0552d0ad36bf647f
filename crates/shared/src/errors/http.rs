use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::errors::{errors::ErrorResponse, service::ServiceError};

/// Error wrapper for the lookup-service boundary: invalid requests surface
/// as 400 with a descriptive body, everything else collapses to a generic
/// 500.
#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(value: ServiceError) -> Self {
        AppErrorHttp(value)
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid input: {msg}"))
            }
            ServiceError::Repo(err) => {
                error!("repository failure: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ServiceError::RemoteCall(err) => {
                error!("remote call failure: {err:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
            ServiceError::Internal(msg) => {
                error!("internal failure: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

/// Error wrapper for the consolidator boundary. Every failure, whatever its
/// cause, maps to 500 with an empty body; the cause is logged, never
/// surfaced over the wire.
#[derive(Debug)]
pub struct AppErrorConsolidated(pub ServiceError);

impl From<ServiceError> for AppErrorConsolidated {
    fn from(value: ServiceError) -> Self {
        AppErrorConsolidated(value)
    }
}

impl IntoResponse for AppErrorConsolidated {
    fn into_response(self) -> Response {
        error!("error occurred while fetching transactions: {}", self.0);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
