//! Dispatcher session definitions.

use serde::{Deserialize, Serialize};

/// Summary of the signed-in dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name.
    pub name: String,
    /// Email address used to sign in.
    pub email: String,
    /// Role label.
    pub role: String,
}

/// Authentication state of the console.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    /// Whether a dispatcher is signed in.
    pub is_authenticated: bool,
    /// The signed-in dispatcher, if any.
    pub current_user: Option<CurrentUser>,
}

impl AuthSession {
    /// A session for the given dispatcher.
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            is_authenticated: true,
            current_user: Some(user),
        }
    }

    /// A signed-out session.
    pub fn signed_out() -> Self {
        Self::default()
    }
}
