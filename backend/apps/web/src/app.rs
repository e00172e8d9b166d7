//! Router composition
//!
//! One remote API client is shared by every feature router.

use std::sync::Arc;

use auth::presentation::router::auth_router;
use auth::{AuthConfig, AuthStatus, RemoteAccountGateway, check_auth_session};
use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::response::Html;
use axum::routing::get;
use health::{RemoteHealthProbe, health_router};
use kernel::error::app_error::AppError;
use platform::html::page;
use platform::{ApiClient, ApiClientConfig};
use tower_http::trace::TraceLayer;

use crate::config::WebConfig;

pub fn build_router(config: &WebConfig) -> anyhow::Result<Router> {
    let client = ApiClient::new(
        ApiClientConfig::new(config.api_base_url.clone()).with_timeout(config.api_timeout),
    )?;

    let mut auth_config = AuthConfig::default();
    match &config.cookie_key {
        Some(key) => auth_config.cookie_key = key.clone(),
        None => tracing::warn!("COOKIE_SECRET not set; sessions will not survive a restart"),
    }
    auth_config.notify_remote_logout = config.notify_remote_logout;
    let auth_config = Arc::new(auth_config);

    let app = Router::new()
        .route("/", get(home))
        .nest(
            "/account",
            auth_router(RemoteAccountGateway::new(client.clone()), auth_config.clone()),
        )
        .merge(health_router(RemoteHealthProbe::new(client)))
        .fallback(not_found)
        .layer(from_fn_with_state(auth_config, check_auth_session))
        .layer(TraceLayer::new_for_http());

    Ok(app)
}

/// GET /
async fn home(status: AuthStatus) -> Html<String> {
    let links = if status.is_authenticated {
        "<p>You are signed in.</p>\n<p><a href=\"/account/logout\">Log out</a></p>"
    } else {
        "<p><a href=\"/account/login\">Log in</a> or <a href=\"/account/register\">register</a>.</p>"
    };

    page(
        "CRM Assistant",
        &format!("<h1>CRM Assistant</h1>\n{links}\n<p><a href=\"/health\">System health</a></p>"),
    )
}

async fn not_found() -> AppError {
    AppError::not_found("Page not found")
}
