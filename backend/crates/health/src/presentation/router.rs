//! Health Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::domain::probe::HealthProbe;
use crate::infra::remote::RemoteHealthProbe;
use crate::presentation::handlers::{self, HealthAppState};

/// Create the Health router backed by the remote API
pub fn health_router(probe: RemoteHealthProbe) -> Router {
    health_router_generic(Arc::new(probe))
}

/// Create a generic Health router for any probe implementation
pub fn health_router_generic<P>(probe: Arc<P>) -> Router
where
    P: HealthProbe + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(handlers::health_page::<P>))
        .route("/health/status", get(handlers::health_status::<P>))
        .with_state(HealthAppState { probe })
}
