//! HTTP Handlers
//!
//! Both endpoints answer 200 whatever the remote API does; the verdict is
//! in the body.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use platform::html::{escape, notice, page};

use crate::application::CheckHealthUseCase;
use crate::domain::probe::HealthProbe;
use crate::domain::summary::HealthSummary;

/// Shared state for health handlers
pub struct HealthAppState<P> {
    pub probe: Arc<P>,
}

impl<P> Clone for HealthAppState<P> {
    fn clone(&self) -> Self {
        Self {
            probe: self.probe.clone(),
        }
    }
}

/// GET /health
pub async fn health_page<P>(State(state): State<HealthAppState<P>>) -> Html<String>
where
    P: HealthProbe + Send + Sync + 'static,
{
    let summary = CheckHealthUseCase::new(state.probe.clone()).execute().await;
    render(&summary)
}

/// GET /health/status
pub async fn health_status<P>(State(state): State<HealthAppState<P>>) -> Json<HealthSummary>
where
    P: HealthProbe + Send + Sync + 'static,
{
    Json(CheckHealthUseCase::new(state.probe.clone()).execute().await)
}

fn render(summary: &HealthSummary) -> Html<String> {
    let verdict = |healthy: bool| if healthy { "Healthy" } else { "Unhealthy" };
    let version = if summary.api_version.is_empty() {
        "unknown"
    } else {
        summary.api_version.as_str()
    };
    let error = (!summary.error_message.is_empty()).then_some(summary.error_message.as_str());

    let body = format!(
        "<h1>System Health</h1>\n{error}\
         <dl>\n\
         <dt>API</dt><dd class=\"{api_class}\">{api}</dd>\n\
         <dt>Database</dt><dd class=\"{db_class}\">{db}</dd>\n\
         <dt>API version</dt><dd>{version}</dd>\n\
         </dl>",
        error = notice("error", error),
        api = verdict(summary.api_healthy),
        api_class = verdict(summary.api_healthy).to_ascii_lowercase(),
        db = verdict(summary.database_healthy),
        db_class = verdict(summary.database_healthy).to_ascii_lowercase(),
        version = escape(version),
    );
    page("System Health", &body)
}
