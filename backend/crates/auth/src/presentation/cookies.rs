//! Browser cookie mapping
//!
//! Turns domain values into `Set-Cookie` entries. Cookies with a value go
//! through a `SignedCookieJar`, so the browser holds value + signature;
//! removals are decided on the raw jar.

use axum_extra::extract::cookie::{Cookie, CookieJar, SignedCookieJar};
use platform::cookie::{CookieConfig, expiry_from_unix};

use crate::application::config::AuthConfig;
use crate::domain::entity::session::SessionCookie;

/// Flash notices outlive one redirect, not a browsing session
const FLASH_MAX_AGE: time::Duration = time::Duration::minutes(5);

/// Session cookie carrying the remote access token.
///
/// Name and path come from the configured policy; every other attribute is
/// the one the domain `SessionCookie` decided on.
pub fn session_cookie(config: &AuthConfig, session: &SessionCookie) -> Cookie<'static> {
    let policy = CookieConfig {
        http_only: session.http_only,
        same_site: session.same_site,
        ..config.session_cookie.clone()
    };

    match expiry_from_unix(session.expires_at.timestamp()) {
        Some(expires_at) => policy.build_expiring(session.value.clone(), session.secure, expires_at),
        None => policy.build_max_age(
            session.value.clone(),
            session.secure,
            time::Duration::seconds(session.lifetime().num_seconds()),
        ),
    }
}

/// Raw access token from a verified session cookie
pub fn session_token(config: &AuthConfig, jar: &SignedCookieJar) -> Option<String> {
    jar.get(&config.session_cookie.name)
        .map(|c| c.value().to_string())
        .filter(|token| !token.is_empty())
}

/// Expire the session cookie if the browser sent one, signed or not.
///
/// Works on the unverified jar: a cookie signed under a previous key still
/// carries a token and must not outlive the logout.
pub fn clear_session(config: &AuthConfig, raw: CookieJar, removal: Cookie<'static>) -> CookieJar {
    if raw.get(&config.session_cookie.name).is_some() {
        raw.remove(removal)
    } else {
        raw
    }
}

pub fn set_flash(config: &AuthConfig, jar: SignedCookieJar, message: &str, secure: bool) -> SignedCookieJar {
    jar.add(
        config
            .flash_cookie
            .build_max_age(message.to_string(), secure, FLASH_MAX_AGE),
    )
}

/// Read the flash notice and schedule its removal
pub fn take_flash(config: &AuthConfig, jar: SignedCookieJar) -> (SignedCookieJar, Option<String>) {
    match jar.get(&config.flash_cookie.name) {
        Some(cookie) => {
            let message = cookie.value().to_string();
            (jar.remove(config.flash_cookie.build_removal()), Some(message))
        }
        None => (jar, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, header};
    use axum::response::IntoResponse;
    use axum_extra::extract::cookie::SameSite;
    use chrono::{TimeDelta, Utc};

    #[test]
    fn test_session_cookie_attributes() {
        let config = AuthConfig::default();
        let now = Utc::now();
        let session = SessionCookie::issue("tok".to_string(), TimeDelta::days(7), true, now);

        let cookie = session_cookie(&config, &session);

        assert_eq!(cookie.name(), "AuthToken");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(
            cookie.expires_datetime().map(|t| t.unix_timestamp()),
            Some((now + TimeDelta::days(7)).timestamp())
        );
    }

    #[test]
    fn test_session_attributes_follow_domain_value() {
        let config = AuthConfig::default();
        let session = SessionCookie {
            http_only: false,
            same_site: platform::cookie::SameSite::Strict,
            ..SessionCookie::issue("tok".to_string(), TimeDelta::hours(1), false, Utc::now())
        };

        let cookie = session_cookie(&config, &session);

        assert_eq!(cookie.http_only(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_flash_round_trip_through_signed_jar() {
        let config = AuthConfig::default();
        let jar = SignedCookieJar::new(config.cookie_key.clone());

        let jar = set_flash(&config, jar, "hello", false);
        let (_, message) = take_flash(&config, jar);

        assert_eq!(message.as_deref(), Some("hello"));
    }

    fn written(jar: CookieJar) -> Vec<String> {
        let response = (jar, ()).into_response();
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .map(|v| v.to_str().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_clear_session_ignores_signature() {
        let config = AuthConfig::default();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "AuthToken=unsigned-tok".parse().unwrap());

        let jar = clear_session(
            &config,
            CookieJar::from_headers(&headers),
            config.session_cookie.build_removal(),
        );

        let cookies = written(jar);
        assert_eq!(cookies.len(), 1);
        assert!(cookies[0].starts_with("AuthToken=;"));
        assert!(cookies[0].contains("Max-Age=0"));
    }

    #[test]
    fn test_clear_session_without_cookie_writes_nothing() {
        let config = AuthConfig::default();

        let jar = clear_session(&config, CookieJar::new(), config.session_cookie.build_removal());

        assert!(written(jar).is_empty());
    }

    #[test]
    fn test_empty_jar_has_no_session() {
        let config = AuthConfig::default();
        let jar = SignedCookieJar::new(config.cookie_key.clone());

        assert_eq!(session_token(&config, &jar), None);
        let (_, message) = take_flash(&config, jar);
        assert_eq!(message, None);
    }
}
