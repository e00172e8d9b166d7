//! Account Gateway Trait
//!
//! Interface to the remote account API. Implementation is in the
//! infrastructure layer; tests substitute in-memory fakes.

use platform::ApiError;
use serde_json::Value;

use crate::domain::entity::credentials::{LoginCredentials, Registration};

/// Decoded body of a successful sign in call.
///
/// Both fields are optional: a 2xx response without a usable token is a
/// rejected sign in, not a transport failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthGrant {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
}

impl AuthGrant {
    /// Read `access_token` / `token_type` from an arbitrary JSON payload.
    /// Absent or non-string fields become `None`.
    pub fn from_json(payload: &Value) -> Self {
        let field = |name: &str| {
            payload
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        Self {
            access_token: field("access_token"),
            token_type: field("token_type"),
        }
    }

    /// Access token, if present and non-blank
    pub fn usable_token(&self) -> Option<&str> {
        self.access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}

/// Remote account API
#[trait_variant::make(AccountGateway: Send)]
pub trait LocalAccountGateway {
    /// Verify credentials; returns the decoded grant on any 2xx
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<AuthGrant, ApiError>;

    /// Create a user account; any 2xx is success
    async fn create_account(&self, registration: &Registration) -> Result<(), ApiError>;

    /// Tell the remote API a session token is no longer used
    async fn revoke_session(&self, access_token: &str) -> Result<(), ApiError>;
}
