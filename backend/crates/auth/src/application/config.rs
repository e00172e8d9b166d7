//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;

use axum_extra::extract::cookie::Key;
use chrono::TimeDelta;
use platform::cookie::CookieConfig;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Name of the cookie that carries the remote access token
pub const SESSION_COOKIE_NAME: &str = "AuthToken";

/// Name of the one-shot notice cookie shown on the next page
pub const FLASH_COOKIE_NAME: &str = "flash";

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Session cookie policy (name, path, HttpOnly, SameSite)
    pub session_cookie: CookieConfig,
    /// Flash notice cookie policy
    pub flash_cookie: CookieConfig,
    /// Session lifetime without "Remember Me" (1 hour)
    pub session_ttl_short: TimeDelta,
    /// Session lifetime with "Remember Me" (7 days)
    pub session_ttl_long: TimeDelta,
    /// Signing key for every cookie this service writes
    pub cookie_key: Key,
    /// Redirect target after sign in and sign out
    pub home_path: String,
    /// Redirect target after registration
    pub login_path: String,
    /// Also tell the remote API when a user signs out
    pub notify_remote_logout: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_cookie: CookieConfig::named(SESSION_COOKIE_NAME),
            flash_cookie: CookieConfig::named(FLASH_COOKIE_NAME),
            session_ttl_short: TimeDelta::hours(1),
            session_ttl_long: TimeDelta::days(7),
            cookie_key: Key::generate(),
            home_path: "/".to_string(),
            login_path: "/account/login".to_string(),
            notify_remote_logout: false,
        }
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_cookie", &self.session_cookie)
            .field("flash_cookie", &self.flash_cookie)
            .field("session_ttl_short", &self.session_ttl_short)
            .field("session_ttl_long", &self.session_ttl_long)
            .field("cookie_key", &"[REDACTED]")
            .field("home_path", &self.home_path)
            .field("login_path", &self.login_path)
            .field("notify_remote_logout", &self.notify_remote_logout)
            .finish()
    }
}

impl AuthConfig {
    /// Session lifetime for the "Remember Me" choice
    pub fn session_lifetime(&self, remember_me: bool) -> TimeDelta {
        if remember_me {
            self.session_ttl_long
        } else {
            self.session_ttl_short
        }
    }
}
