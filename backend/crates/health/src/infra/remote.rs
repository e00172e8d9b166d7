//! Remote health probe

use platform::{ApiClient, ApiError};
use serde_json::Value;

use crate::domain::probe::HealthProbe;

const HEALTH_PATH: &str = "/api/v1/health";

/// Probe backed by `GET /api/v1/health`
#[derive(Debug, Clone)]
pub struct RemoteHealthProbe {
    client: ApiClient,
}

impl RemoteHealthProbe {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

impl HealthProbe for RemoteHealthProbe {
    async fn fetch(&self) -> Result<Value, ApiError> {
        self.client.get_json(HEALTH_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::CheckHealthUseCase;
    use platform::ApiClientConfig;
    use serde_json::json;
    use std::sync::Arc;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn probe_for(server: &MockServer) -> RemoteHealthProbe {
        let base = Url::parse(&server.uri()).unwrap();
        RemoteHealthProbe::new(ApiClient::new(ApiClientConfig::new(base)).unwrap())
    }

    #[tokio::test]
    async fn healthy_api_end_to_end() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(HEALTH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "api_version": "0.9.0",
                "database": { "status": "ok" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = CheckHealthUseCase::new(Arc::new(probe_for(&server)))
            .execute()
            .await;

        assert!(summary.api_healthy);
        assert!(summary.database_healthy);
        assert_eq!(summary.api_version, "0.9.0");
    }

    #[tokio::test]
    async fn html_error_page_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(HEALTH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let summary = CheckHealthUseCase::new(Arc::new(probe_for(&server)))
            .execute()
            .await;

        assert!(!summary.api_healthy);
        assert!(!summary.error_message.is_empty());
    }
}
