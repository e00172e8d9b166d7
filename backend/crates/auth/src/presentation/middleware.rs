//! Auth Middleware
//!
//! Marks each request with whether it carries a verifiable session cookie.
//! The cookie is never validated against the remote API here.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::SignedCookieJar;

use crate::application::config::AuthConfig;
use crate::presentation::cookies::session_token;

/// Authentication status stored in request extensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthStatus {
    pub is_authenticated: bool,
}

/// Reads the status left by [`check_auth_session`]; unauthenticated when
/// the middleware did not run.
impl<S> FromRequestParts<S> for AuthStatus
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<AuthStatus>().copied().unwrap_or_default())
    }
}

/// Middleware that checks the session cookie but doesn't require it.
///
/// Install with `axum::middleware::from_fn_with_state(config, check_auth_session)`.
pub async fn check_auth_session(
    State(config): State<Arc<AuthConfig>>,
    mut req: Request,
    next: Next,
) -> Response {
    let jar = SignedCookieJar::from_headers(req.headers(), config.cookie_key.clone());
    let is_authenticated = session_token(&config, &jar).is_some();

    req.extensions_mut().insert(AuthStatus { is_authenticated });

    next.run(req).await
}
