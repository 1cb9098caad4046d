//! Construction and clearing of the auth cookies.
//!
//! The `session_token` cookie is http-only; the `access_token` and
//! `refresh_token` cookies are readable by the frontend, which attaches the
//! access token to its own API calls.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use super::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, SESSION_COOKIE};

/// Create the session-JWT cookie.
pub fn session_cookie(value: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::days(ttl_days))
        .build()
}

/// Create a frontend-readable token cookie (`access_token` / `refresh_token`).
pub fn token_cookie(name: &'static str, value: String, ttl_days: i64) -> Cookie<'static> {
    Cookie::build((name, value))
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::days(ttl_days))
        .build()
}

/// Create a removal cookie for `name`.
pub fn clear_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Remove all three auth cookies from the jar.
///
/// Called before every new sign-in attempt and at sign-out.
pub fn clear_auth_cookies(jar: CookieJar) -> CookieJar {
    jar.add(clear_cookie(ACCESS_TOKEN_COOKIE))
        .add(clear_cookie(REFRESH_TOKEN_COOKIE))
        .add(clear_cookie(SESSION_COOKIE))
}
