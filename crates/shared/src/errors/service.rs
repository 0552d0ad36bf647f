use thiserror::Error;

use crate::errors::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Blank or unknown account number, or a malformed status filter.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    /// Transport failure, non-2xx status or undecodable body from a
    /// downstream lookup service.
    #[error("Remote call failed: {0}")]
    RemoteCall(#[from] reqwest::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
