//! Session Cookie Entity
//!
//! The local session: the remote access token plus the policy under which
//! the browser holds it. Never stored server-side.

use chrono::{DateTime, TimeDelta, Utc};
use platform::cookie::SameSite;

/// Session cookie to be written to the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    /// Remote access token
    pub value: String,
    pub http_only: bool,
    /// Only set when the issuing request arrived over HTTPS
    pub secure: bool,
    pub same_site: SameSite,
    /// Clock reading used to compute `expires_at`
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionCookie {
    pub fn issue(
        access_token: String,
        lifetime: TimeDelta,
        secure: bool,
        issued_at: DateTime<Utc>,
    ) -> Self {
        Self {
            value: access_token,
            http_only: true,
            secure,
            same_site: SameSite::Lax,
            issued_at,
            expires_at: issued_at + lifetime,
        }
    }

    pub fn lifetime(&self) -> TimeDelta {
        self.expires_at - self.issued_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_policy() {
        let now = Utc::now();
        let cookie = SessionCookie::issue("tok".to_string(), TimeDelta::hours(1), false, now);

        assert_eq!(cookie.value, "tok");
        assert!(cookie.http_only);
        assert!(!cookie.secure);
        assert_eq!(cookie.same_site, SameSite::Lax);
        assert_eq!(cookie.expires_at, now + TimeDelta::hours(1));
        assert_eq!(cookie.lifetime(), TimeDelta::hours(1));
    }
}
