//! Route definitions for the `/api/auth` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, method_not_allowed};
use crate::state::AppState;

/// Routes mounted at `/api/auth`.
///
/// ```text
/// POST /register                -> register
/// POST /confirm-email           -> confirm_email (?token=)
/// POST /callback/credentials    -> callback_credentials
/// POST /callback/google         -> callback_google
/// GET  /session                 -> session
/// POST /signout                 -> signout
/// ```
///
/// Any other verb answers 405 with the failure envelope, locally.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/register",
            post(auth::register).fallback(method_not_allowed),
        )
        .route(
            "/confirm-email",
            post(auth::confirm_email).fallback(method_not_allowed),
        )
        .route(
            "/callback/credentials",
            post(auth::callback_credentials).fallback(method_not_allowed),
        )
        .route(
            "/callback/google",
            post(auth::callback_google).fallback(method_not_allowed),
        )
        .route("/session", get(auth::session).fallback(method_not_allowed))
        .route("/signout", post(auth::signout).fallback(method_not_allowed))
}
