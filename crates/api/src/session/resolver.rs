//! Bearer-credential resolution.
//!
//! The access token lives in one of two places: the `access_token` cookie
//! (credential login) or the session JWT (OAuth login). The cookie wins.
//! Absence means "unauthenticated", never an error -- callers decide whether
//! that warrants a redirect, a null session, or an unauthenticated outbound
//! call.

use axum_extra::extract::cookie::CookieJar;

use super::token::{decode_session, SessionConfig};
use super::{ACCESS_TOKEN_COOKIE, SESSION_COOKIE};

/// Resolve the caller's bearer access token from the cookie jar.
///
/// Precedence: `access_token` cookie first; otherwise the access-token field
/// of a valid session JWT. Returns `None` when neither source yields a
/// token, when the session token fails validation, or when no session
/// secret is configured.
pub fn resolve_token(jar: &CookieJar, session: &SessionConfig) -> Option<String> {
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    let secret = session.secret.as_deref()?;
    let raw = jar.get(SESSION_COOKIE)?;
    decode_session(raw.value(), secret).ok()?.access_token
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::token::{encode_session, SessionClaims};
    use axum_extra::extract::cookie::Cookie;
    use expense_core::session::{AuthIdentity, SessionUser};

    const SECRET: &str = "resolver-test-secret";

    fn test_session_config() -> SessionConfig {
        SessionConfig {
            secret: Some(SECRET.into()),
            ttl_days: 30,
        }
    }

    fn session_jwt(access_token: &str) -> String {
        let identity = AuthIdentity {
            user: SessionUser::default(),
            access_token: access_token.into(),
            refresh_token: None,
        };
        let claims = SessionClaims::from_identity(&identity, 30);
        encode_session(&claims, SECRET).expect("encoding should succeed")
    }

    #[test]
    fn cookie_wins_over_session() {
        let jar = CookieJar::new()
            .add(Cookie::new(ACCESS_TOKEN_COOKIE, "cookie-token"))
            .add(Cookie::new(SESSION_COOKIE, session_jwt("session-token")));

        let resolved = resolve_token(&jar, &test_session_config());
        assert_eq!(resolved.as_deref(), Some("cookie-token"));
    }

    #[test]
    fn session_used_when_cookie_absent() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, session_jwt("session-token")));

        let resolved = resolve_token(&jar, &test_session_config());
        assert_eq!(resolved.as_deref(), Some("session-token"));
    }

    #[test]
    fn neither_source_resolves_to_none() {
        let jar = CookieJar::new();
        assert_eq!(resolve_token(&jar, &test_session_config()), None);
    }

    #[test]
    fn invalid_session_token_resolves_to_none() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "not-a-jwt"));
        assert_eq!(resolve_token(&jar, &test_session_config()), None);
    }

    #[test]
    fn missing_secret_disables_session_fallback() {
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, session_jwt("session-token")));
        let config = SessionConfig {
            secret: None,
            ttl_days: 30,
        };
        assert_eq!(resolve_token(&jar, &config), None);
    }

    #[test]
    fn empty_cookie_falls_through_to_session() {
        let jar = CookieJar::new()
            .add(Cookie::new(ACCESS_TOKEN_COOKIE, ""))
            .add(Cookie::new(SESSION_COOKIE, session_jwt("session-token")));

        let resolved = resolve_token(&jar, &test_session_config());
        assert_eq!(resolved.as_deref(), Some("session-token"));
    }
}
