//! Route guard for protected page navigation.
//!
//! Unauthenticated navigation to a protected prefix redirects to the login
//! page with the originally requested path in `returnUrl`; the login form
//! sends the user back there after sign-in. Public paths bypass the check
//! unconditionally, token or not.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::session::resolver::resolve_token;
use crate::state::AppState;

/// Path prefixes that require a session (including their sub-paths).
const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/profile", "/expenses"];

/// Paths that bypass the guard unconditionally.
const PUBLIC_PREFIXES: &[&str] = &["/auth/login", "/auth/register", "/api/auth"];

/// Login entry point unauthenticated callers are redirected to.
const LOGIN_PATH: &str = "/auth/login";

/// Gate navigation to the protected page prefixes.
pub async fn guard(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path();

    if is_public(path) {
        return next.run(request).await;
    }

    if is_protected(path) && resolve_token(&jar, &state.config.session).is_none() {
        let location = format!("{LOGIN_PATH}?returnUrl={}", urlencoding::encode(path));
        return Redirect::temporary(&location).into_response();
    }

    next.run(request).await
}

fn is_public(path: &str) -> bool {
    PUBLIC_PREFIXES.iter().any(|prefix| path.starts_with(prefix))
}

fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES
        .iter()
        .any(|prefix| path == *prefix || path.starts_with(&format!("{prefix}/")))
}
