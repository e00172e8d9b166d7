//! HTTP Handlers

use std::sync::Arc;

use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::extract::{FromRef, State};
use axum::http::{HeaderMap, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{CookieJar, Key, SignedCookieJar};
use kernel::error::app_error::AppResult;
use platform::client::RequestScheme;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignOutUseCase, SignUpUseCase};
use crate::domain::gateway::AccountGateway;
use crate::presentation::cookies::{
    clear_session, session_cookie, session_token, set_flash, take_flash,
};
use crate::presentation::dto::{LoginForm, RegisterForm};
use crate::presentation::view::{self, LoginView, RegisterView};

/// Shared state for auth handlers
pub struct AuthAppState<G> {
    pub gateway: Arc<G>,
    pub config: Arc<AuthConfig>,
}

impl<G> Clone for AuthAppState<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            config: self.config.clone(),
        }
    }
}

impl<G> FromRef<AuthAppState<G>> for Key {
    fn from_ref(state: &AuthAppState<G>) -> Self {
        state.config.cookie_key.clone()
    }
}

// ============================================================================
// Sign In
// ============================================================================

/// GET /account/login
pub async fn login_page<G>(
    State(state): State<AuthAppState<G>>,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>)
where
    G: AccountGateway + Send + Sync + 'static,
{
    let (jar, notice) = take_flash(&state.config, jar);

    let page = view::login_page(&LoginView {
        notice: notice.as_deref(),
        ..Default::default()
    });

    (jar, page)
}

/// POST /account/login
pub async fn sign_in<G>(
    State(state): State<AuthAppState<G>>,
    jar: SignedCookieJar,
    headers: HeaderMap,
    uri: Uri,
    form: Result<Form<LoginForm>, FormRejection>,
) -> AppResult<Response>
where
    G: AccountGateway + Send + Sync + 'static,
{
    let Form(form) = form?;
    let username = form.username.clone();
    let remember_me = form.remember_me();

    let use_case = SignInUseCase::new(state.gateway.clone(), state.config.clone());
    let input = SignInInput {
        submission: form.into_submission(),
        scheme: RequestScheme::detect(&headers, &uri),
    };

    match use_case.execute(input).await {
        Ok(output) => {
            let jar = jar.add(session_cookie(&state.config, &output.session));
            tracing::debug!(token_type = %output.token_type, "Session cookie written");
            Ok((jar, Redirect::to(&state.config.home_path)).into_response())
        }
        Err(err) => {
            err.log();
            let page = view::login_page(&LoginView {
                username: &username,
                remember_me,
                errors: err.field_errors(),
                message: Some(err.user_message()),
                notice: None,
            });
            Ok((err.status_code(), page).into_response())
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// GET /account/register
pub async fn register_page() -> Html<String> {
    view::register_page(&RegisterView::default())
}

/// POST /account/register
pub async fn sign_up<G>(
    State(state): State<AuthAppState<G>>,
    jar: SignedCookieJar,
    headers: HeaderMap,
    uri: Uri,
    form: Result<Form<RegisterForm>, FormRejection>,
) -> AppResult<Response>
where
    G: AccountGateway + Send + Sync + 'static,
{
    let Form(form) = form?;
    let retained = RegisterForm {
        password: String::new(),
        confirm_password: String::new(),
        ..form.clone()
    };

    let use_case = SignUpUseCase::new(state.gateway.clone(), state.config.clone());

    match use_case.execute(form.into_submission()).await {
        Ok(output) => {
            let secure = RequestScheme::detect(&headers, &uri).is_https();
            let jar = set_flash(&state.config, jar, output.notice, secure);
            Ok((jar, Redirect::to(&output.redirect_to)).into_response())
        }
        Err(err) => {
            err.log();
            let page = view::register_page(&RegisterView {
                full_name: &retained.full_name,
                email: &retained.email,
                username: &retained.username,
                errors: err.field_errors(),
                message: Some(err.user_message()),
            });
            Ok((err.status_code(), page).into_response())
        }
    }
}

// ============================================================================
// Sign Out
// ============================================================================

/// GET /account/logout
pub async fn logout_page() -> Html<String> {
    view::logout_page()
}

/// POST /account/logout
///
/// The remote API only hears about sessions whose signature verifies, but
/// the browser's `AuthToken` is cleared whenever one is sent at all.
pub async fn sign_out<G>(
    State(state): State<AuthAppState<G>>,
    signed: SignedCookieJar,
    raw: CookieJar,
) -> (CookieJar, Redirect)
where
    G: AccountGateway + Send + Sync + 'static,
{
    let token = session_token(&state.config, &signed);

    let use_case = SignOutUseCase::new(state.gateway.clone(), state.config.clone());
    let output = use_case.execute(token.as_deref()).await;

    (
        clear_session(&state.config, raw, output.removal),
        Redirect::to(&state.config.home_path),
    )
}
