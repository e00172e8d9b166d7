//! Cookie Management Infrastructure
//!
//! Builds session-style cookies with a fixed name, path and policy.

use axum_extra::extract::cookie::{self, Cookie};
use time::{Duration, OffsetDateTime};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl From<SameSite> for cookie::SameSite {
    fn from(value: SameSite) -> Self {
        match value {
            SameSite::Strict => cookie::SameSite::Strict,
            SameSite::Lax => cookie::SameSite::Lax,
            SameSite::None => cookie::SameSite::None,
        }
    }
}

/// Cookie configuration
///
/// `Secure` is not part of the configuration: it depends on the request
/// that triggers the write and is passed in per cookie.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }
}

impl CookieConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Cookie that expires at an absolute instant
    pub fn build_expiring(
        &self,
        value: impl Into<String>,
        secure: bool,
        expires_at: OffsetDateTime,
    ) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value.into()))
            .http_only(self.http_only)
            .secure(secure)
            .same_site(self.same_site.into())
            .path(self.path.clone())
            .expires(expires_at)
            .build()
    }

    /// Cookie that lives for `max_age` from now
    pub fn build_max_age(
        &self,
        value: impl Into<String>,
        secure: bool,
        max_age: Duration,
    ) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value.into()))
            .http_only(self.http_only)
            .secure(secure)
            .same_site(self.same_site.into())
            .path(self.path.clone())
            .max_age(max_age)
            .build()
    }

    /// Removal cookie; name and path must match the issued cookie.
    pub fn build_removal(&self) -> Cookie<'static> {
        Cookie::build((self.name.clone(), ""))
            .path(self.path.clone())
            .max_age(Duration::ZERO)
            .build()
    }
}

/// Convert a unix timestamp (seconds) into a cookie expiry instant
pub fn expiry_from_unix(timestamp: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp(timestamp).ok()
}
