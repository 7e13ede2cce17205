//! Gateway errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kv_02_namespaced_storage::NamespaceError;
use kv_03_request_auth::AuthError;
use thiserror::Error;

/// Per-request failure. Every variant is terminal for the request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication refused the request
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Storage engine failure
    #[error(transparent)]
    Storage(#[from] NamespaceError),

    /// Blocking task panicked or was cancelled
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Auth(AuthError::SignatureMismatch) => StatusCode::FORBIDDEN,
            ApiError::Auth(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Label for the `outcome` dimension of the request counter.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::Auth(AuthError::SignatureMismatch) => "wrong_signature",
            ApiError::Auth(AuthError::InvalidPublicKey(_)) => "invalid_key",
            ApiError::Auth(_) => "malformed",
            ApiError::Storage(_) => "storage_error",
            ApiError::Internal(_) => "internal_error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Gateway lifecycle errors
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Server socket bind error
    #[error("server bind error on {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// Server stopped with an I/O error
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}
