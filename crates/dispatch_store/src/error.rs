//! Dispatch store error types.

use thiserror::Error;

/// Errors that can occur during dispatch store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchStoreError {
    /// Record not found.
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl DispatchStoreError {
    /// Creates a not found error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Returns true if this is a not found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for dispatch store operations.
pub type DispatchStoreResult<T> = Result<T, DispatchStoreError>;
