//! Dispatcher sign-in for the dispatch console.
//!
//! This crate provides:
//! - Credential checking behind the [`CredentialVerifier`] trait
//! - A mock verifier that accepts any non-empty email/password pair

mod credentials;
mod error;

pub use credentials::*;
pub use error::*;

/// Display name given to every dispatcher signed in through the mock verifier.
pub const PLACEHOLDER_USER_NAME: &str = "Admin User";

/// Role label given to every dispatcher signed in through the mock verifier.
pub const PLACEHOLDER_USER_ROLE: &str = "Super Admin";
