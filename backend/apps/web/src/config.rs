//! Web server configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;

use axum_extra::extract::cookie::Key;
use base64::Engine;
use base64::engine::general_purpose;
use platform::config::{ConfigError, env_bool, env_opt, env_parse, env_string};
use url::Url;

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED),
    8080,
);
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

pub struct WebConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the remote API
    pub api_base_url: Url,
    pub api_timeout: Duration,
    /// Cookie signing key; `None` means generate one for this process
    pub cookie_key: Option<Key>,
    pub notify_remote_logout: bool,
}

impl fmt::Debug for WebConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebConfig")
            .field("bind_addr", &self.bind_addr)
            .field("api_base_url", &self.api_base_url.as_str())
            .field("api_timeout", &self.api_timeout)
            .field("cookie_key", &self.cookie_key.as_ref().map(|_| "[REDACTED]"))
            .field("notify_remote_logout", &self.notify_remote_logout)
            .finish()
    }
}

impl WebConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = env_string("API_BASE_URL", DEFAULT_API_BASE_URL);
        let api_base_url =
            Url::parse(&api_base_url).map_err(|e| ConfigError::invalid("API_BASE_URL", e))?;

        let timeout_secs = env_parse("API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::invalid("API_TIMEOUT_SECS", "must be positive"));
        }

        Ok(Self {
            bind_addr: env_parse("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            api_base_url,
            api_timeout: Duration::from_secs(timeout_secs),
            cookie_key: cookie_key_from_env()?,
            notify_remote_logout: env_bool("NOTIFY_REMOTE_LOGOUT", false)?,
        })
    }
}

/// `COOKIE_SECRET`: standard base64, at least 64 bytes once decoded
fn cookie_key_from_env() -> Result<Option<Key>, ConfigError> {
    let Some(secret) = env_opt("COOKIE_SECRET") else {
        return Ok(None);
    };

    let bytes = general_purpose::STANDARD
        .decode(secret.as_bytes())
        .map_err(|e| ConfigError::invalid("COOKIE_SECRET", e))?;

    Key::try_from(bytes.as_slice())
        .map(Some)
        .map_err(|_| ConfigError::invalid("COOKIE_SECRET", "must decode to at least 64 bytes"))
}
