//! Remote API Client
//!
//! Thin JSON-over-HTTP client for the authoritative backend API.
//! Owns the outbound connection pool; every feature crate talks to the
//! backend through this type.
//!
//! Failures are classified structurally ([`ApiError::is_client_error`])
//! so callers never inspect error text.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{Instrument, debug, info_span};
use url::Url;

/// Default timeout for a single remote call
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Remote API client configuration
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL of the backend, e.g. `http://localhost:8000`
    pub base_url: Url,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent sent with every request
    pub user_agent: String,
}

impl ApiClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Error returned by [`ApiClient`]
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Path could not be joined onto the base URL
    #[error("invalid remote API URL: {0}")]
    Url(#[from] url::ParseError),

    /// Remote API answered with a non-2xx status
    #[error("remote API returned {status}")]
    Status { status: StatusCode, body: String },

    /// No response within the configured timeout
    #[error("remote API request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// Connection could not be established
    #[error("could not connect to remote API: {0}")]
    Connect(#[source] reqwest::Error),

    /// 2xx response whose body is not the expected JSON
    #[error("could not decode remote API response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Any other transport failure
    #[error("remote API request failed: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ApiError {
    /// True only for a 4xx response.
    ///
    /// Timeouts, 5xx and connection failures are not client errors.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::Status { status, .. } if status.is_client_error())
    }

    /// Status code, if the remote API answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err)
        } else if err.is_connect() {
            ApiError::Connect(err)
        } else {
            ApiError::Transport(err)
        }
    }
}

/// Pooled client for the backend API. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// GET `path` and decode the JSON body
    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let body = self.send("GET", &url, self.http.get(url.clone())).await?;
        decode(&body)
    }

    /// POST a JSON body to `path` and decode the JSON response
    pub async fn post_json<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let body = self
            .send("POST", &url, self.http.post(url.clone()).json(payload))
            .await?;
        decode(&body)
    }

    /// POST a JSON body to `path`; any 2xx body is accepted and discarded
    pub async fn post_discard<B>(&self, path: &str, payload: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.send("POST", &url, self.http.post(url.clone()).json(payload))
            .await?;
        Ok(())
    }

    /// POST without a body, authenticated with a bearer token
    pub async fn post_with_bearer(&self, path: &str, token: &str) -> Result<(), ApiError> {
        let url = self.endpoint(path)?;
        let request = self
            .http
            .post(url.clone())
            .header(AUTHORIZATION, format!("Bearer {token}"));
        self.send("POST", &url, request).await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    async fn send(
        &self,
        method: &'static str,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<Vec<u8>, ApiError> {
        let span = info_span!("api.request", http.method = method, url = %url);

        async move {
            let response = request.header(ACCEPT, "application/json").send().await?;
            let status = response.status();
            let bytes = response.bytes().await?;

            debug!(status = status.as_u16(), bytes = bytes.len(), "remote API responded");

            if !status.is_success() {
                return Err(ApiError::Status {
                    status,
                    body: String::from_utf8_lossy(&bytes).into_owned(),
                });
            }

            Ok(bytes.to_vec())
        }
        .instrument(span)
        .await
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::Decode)
}
