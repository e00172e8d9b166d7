//! Client request utilities
//!
//! Helpers for facts about the inbound request as seen past a trusted
//! reverse proxy.

use axum::http::{HeaderMap, Uri};

/// Transport the browser used to reach us
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestScheme {
    Http,
    Https,
}

impl RequestScheme {
    /// Detect the original scheme of a request.
    ///
    /// Checks, in order: an absolute request URI, `X-Forwarded-Proto`
    /// (first value), and the `proto=` parameter of RFC 7239 `Forwarded`.
    ///
    /// ## Arguments
    /// * `headers` - HTTP request headers, possibly set by a reverse proxy
    /// * `uri` - Request URI as received
    ///
    /// ## Returns
    /// `Https` when any source says so, otherwise `Http`
    pub fn detect(headers: &HeaderMap, uri: &Uri) -> Self {
        if let Some(scheme) = uri.scheme_str() {
            return Self::from_token(scheme);
        }

        if let Some(proto) = headers
            .get("x-forwarded-proto")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
        {
            return Self::from_token(proto);
        }

        if let Some(proto) = headers
            .get("forwarded")
            .and_then(|v| v.to_str().ok())
            .and_then(forwarded_proto)
        {
            return Self::from_token(proto);
        }

        RequestScheme::Http
    }

    pub fn is_https(&self) -> bool {
        matches!(self, RequestScheme::Https)
    }

    fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("https") {
            RequestScheme::Https
        } else {
            RequestScheme::Http
        }
    }
}

/// `proto` parameter of the first element of a `Forwarded` header
fn forwarded_proto(value: &str) -> Option<&str> {
    value
        .split(',')
        .next()?
        .split(';')
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            key.eq_ignore_ascii_case("proto")
                .then(|| value.trim_matches('"'))
        })
}
