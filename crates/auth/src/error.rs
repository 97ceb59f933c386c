//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during sign-in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password was rejected.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Result type for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
