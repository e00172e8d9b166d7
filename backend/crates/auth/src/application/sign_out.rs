//! Sign Out Use Case
//!
//! Clears the session cookie. Optionally tells the remote API, but never
//! fails: the cookie removal is produced on every path.

use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;

use crate::application::config::AuthConfig;
use crate::domain::gateway::AccountGateway;

/// What happened to the remote side of the logout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteLogout {
    /// Disabled, or there was no session to revoke
    Skipped,
    Notified,
    /// Remote call failed; logged and ignored
    Failed,
}

/// Sign out output
#[derive(Debug)]
pub struct SignOutOutput {
    /// Expired cookie with the session cookie's name and path
    pub removal: Cookie<'static>,
    pub remote: RemoteLogout,
}

/// Sign out use case
pub struct SignOutUseCase<G>
where
    G: AccountGateway,
{
    gateway: Arc<G>,
    config: Arc<AuthConfig>,
}

impl<G> SignOutUseCase<G>
where
    G: AccountGateway,
{
    pub fn new(gateway: Arc<G>, config: Arc<AuthConfig>) -> Self {
        Self { gateway, config }
    }

    pub async fn execute(&self, session_token: Option<&str>) -> SignOutOutput {
        let removal = self.config.session_cookie.build_removal();

        let remote = match session_token {
            Some(token) if self.config.notify_remote_logout => {
                match self.gateway.revoke_session(token).await {
                    Ok(()) => RemoteLogout::Notified,
                    Err(e) => {
                        tracing::warn!(error = %e, "Remote logout failed; clearing cookie anyway");
                        RemoteLogout::Failed
                    }
                }
            }
            _ => RemoteLogout::Skipped,
        };

        tracing::info!(
            had_session = session_token.is_some(),
            remote = ?remote,
            "User signed out"
        );

        SignOutOutput { removal, remote }
    }
}
