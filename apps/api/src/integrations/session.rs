use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
};

use crate::errors::AppError;

const SESSION_COOKIE: &str = "session";

/// Presence-only session: the caller sent a non-empty bearer token or session cookie.
/// Validating the token belongs to the auth service, not to this API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: String) -> Self {
        Self { token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Bearer token takes precedence over the cookie.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        bearer_token(headers)
            .or_else(|| cookie_token(headers))
            .map(|t| Session::new(t.to_string()))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn cookie_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && !value.trim().is_empty())
        .map(|(_, value)| value.trim())
}

#[async_trait]
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Session::from_headers(&parts.headers).ok_or(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_no_headers_is_no_session() {
        assert!(Session::from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_bearer_token_is_session() {
        let session = Session::from_headers(&headers(&[("authorization", "Bearer abc123")])).unwrap();
        assert_eq!(session.token(), "abc123");
    }

    #[test]
    fn test_empty_bearer_is_no_session() {
        assert!(Session::from_headers(&headers(&[("authorization", "Bearer ")])).is_none());
        assert!(Session::from_headers(&headers(&[("authorization", "Basic dXNlcg==")])).is_none());
    }

    #[test]
    fn test_session_cookie_is_session() {
        let session =
            Session::from_headers(&headers(&[("cookie", "theme=dark; session=tok-9; lang=en")]))
                .unwrap();
        assert_eq!(session.token(), "tok-9");
    }

    #[test]
    fn test_empty_or_other_cookie_is_no_session() {
        assert!(Session::from_headers(&headers(&[("cookie", "session=")])).is_none());
        assert!(Session::from_headers(&headers(&[("cookie", "sessionid=abc")])).is_none());
    }

    #[test]
    fn test_bearer_wins_over_cookie() {
        let session = Session::from_headers(&headers(&[
            ("authorization", "Bearer from-header"),
            ("cookie", "session=from-cookie"),
        ]))
        .unwrap();
        assert_eq!(session.token(), "from-header");
    }
}
