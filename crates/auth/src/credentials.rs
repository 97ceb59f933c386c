//! Credential checking.

use std::fmt;

use entities::CurrentUser;

use crate::{AuthError, AuthResult, PLACEHOLDER_USER_NAME, PLACEHOLDER_USER_ROLE};

/// Email and password submitted at sign-in.
#[derive(Clone)]
pub struct Credentials {
    /// Email address.
    pub email: String,
    /// Password, never logged.
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .finish()
    }
}

/// Trait for checking sign-in credentials.
pub trait CredentialVerifier: Send + Sync {
    /// Verifies the credentials and returns the signed-in user.
    fn verify(&self, credentials: &Credentials) -> AuthResult<CurrentUser>;
}

/// Verifier that accepts any non-empty email and password.
///
/// There is no credential store; every accepted dispatcher gets the same
/// placeholder name and role.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCredentialVerifier;

impl MockCredentialVerifier {
    /// Creates a new mock verifier.
    pub fn new() -> Self {
        Self
    }
}

impl CredentialVerifier for MockCredentialVerifier {
    fn verify(&self, credentials: &Credentials) -> AuthResult<CurrentUser> {
        if credentials.email.is_empty() || credentials.password.is_empty() {
            tracing::debug!("Rejected sign-in with empty email or password");
            return Err(AuthError::InvalidCredentials);
        }

        Ok(CurrentUser {
            name: PLACEHOLDER_USER_NAME.to_string(),
            email: credentials.email.clone(),
            role: PLACEHOLDER_USER_ROLE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_any_non_empty_pair() {
        let verifier = MockCredentialVerifier::new();
        let user = verifier
            .verify(&Credentials::new("dispatch@example.com", "hunter2"))
            .unwrap();

        assert_eq!(user.email, "dispatch@example.com");
        assert_eq!(user.name, PLACEHOLDER_USER_NAME);
        assert_eq!(user.role, PLACEHOLDER_USER_ROLE);
    }

    #[test]
    fn test_rejects_empty_fields() {
        let verifier = MockCredentialVerifier::new();

        assert_eq!(
            verifier.verify(&Credentials::new("", "secret")),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            verifier.verify(&Credentials::new("dispatch@example.com", "")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = Credentials::new("dispatch@example.com", "hunter2");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("dispatch@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
