//! Server error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dispatch_store::DispatchStoreError;
use rpc_protocol::{error_codes, ErrorResponse};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Authentication required.
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Sign-in rejected.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] DispatchStoreError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, error_codes::INVALID_REQUEST, msg.clone())
            }
            ServerError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, error_codes::RESOURCE_NOT_FOUND, msg.clone())
            }
            ServerError::AuthenticationRequired => (
                StatusCode::UNAUTHORIZED,
                error_codes::AUTHENTICATION_REQUIRED,
                self.to_string(),
            ),
            ServerError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                error_codes::INVALID_CREDENTIALS,
                self.to_string(),
            ),
            ServerError::Store(e @ DispatchStoreError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, error_codes::RESOURCE_NOT_FOUND, e.to_string())
            }
        };

        (status, Json(ErrorResponse::new(error_code, message))).into_response()
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::InvalidRequest("title is required".into()), StatusCode::BAD_REQUEST),
            (ServerError::AuthenticationRequired, StatusCode::UNAUTHORIZED),
            (ServerError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                ServerError::from(DispatchStoreError::not_found("Ticket", "TKT-404")),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
