//! Sign In Use Case
//!
//! Validates the login form, asks the remote API for an access token and
//! turns it into a session cookie.

use std::sync::Arc;

use chrono::Utc;
use platform::client::RequestScheme;

use crate::application::config::AuthConfig;
use crate::domain::entity::credentials::LoginSubmission;
use crate::domain::entity::session::SessionCookie;
use crate::domain::gateway::AccountGateway;
use crate::error::{AuthError, AuthOperation, AuthResult};

/// Token type assumed when the remote API does not name one
const DEFAULT_TOKEN_TYPE: &str = "bearer";

/// Sign in input
pub struct SignInInput {
    pub submission: LoginSubmission,
    /// Transport of the request; decides the cookie's `Secure` flag
    pub scheme: RequestScheme,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session cookie to write
    pub session: SessionCookie,
    pub token_type: String,
}

/// Sign in use case
pub struct SignInUseCase<G>
where
    G: AccountGateway,
{
    gateway: Arc<G>,
    config: Arc<AuthConfig>,
}

impl<G> SignInUseCase<G>
where
    G: AccountGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<AuthConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let credentials = input.submission.validate()?;

        let grant = self
            .gateway
            .authenticate(&credentials)
            .await
            .map_err(|e| AuthError::from_remote(AuthOperation::Login, e))?;

        let Some(token) = grant.usable_token() else {
            tracing::warn!(
                username = %credentials.username(),
                "Remote API accepted login without an access token"
            );
            return Err(AuthError::InvalidCredentials);
        };

        let lifetime = self.config.session_lifetime(credentials.remember_me());
        let session = SessionCookie::issue(
            token.to_string(),
            lifetime,
            input.scheme.is_https(),
            Utc::now(),
        );

        let token_type = grant
            .token_type
            .clone()
            .unwrap_or_else(|| DEFAULT_TOKEN_TYPE.to_string());

        tracing::info!(
            username = %credentials.username(),
            remember_me = credentials.remember_me(),
            expires_at = %session.expires_at,
            "User signed in"
        );

        Ok(SignInOutput {
            session,
            token_type,
        })
    }
}
