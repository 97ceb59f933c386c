//! Error payloads

use serde::{Deserialize, Serialize};

/// Machine-readable codes carried in [`ErrorBody::code`].
pub mod error_codes {
    /// The request body is malformed or a required field is blank
    pub const INVALID_REQUEST: &str = "invalid_request";
    /// The addressed technician or ticket does not exist
    pub const RESOURCE_NOT_FOUND: &str = "resource_not_found";
    /// The route needs a signed-in dispatcher
    pub const AUTHENTICATION_REQUIRED: &str = "authentication_required";
    /// Sign-in was rejected
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
}

/// Error object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// One of the [`error_codes`]
    pub code: String,
    /// Human-readable description
    pub message: String,
}

/// Body of every failed response: `{"error": {"code": ..., "message": ...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

impl ErrorResponse {
    /// Creates a new error response
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                code: code.to_string(),
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ErrorResponse::new(error_codes::RESOURCE_NOT_FOUND, "Ticket not found: TKT-404");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["error"]["code"], "resource_not_found");
        assert_eq!(json["error"]["message"], "Ticket not found: TKT-404");
    }
}
