//! Application-shell page routes.
//!
//! The SPA bundle owns all presentation; these routes exist so navigation
//! has a server surface for the route guard to gate. Every page serves the
//! same minimal shell.

use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

const APP_SHELL: &str = concat!(
    "<!doctype html>",
    "<html lang=\"en\">",
    "<head><meta charset=\"utf-8\"><title>Daily Expense</title></head>",
    "<body><div id=\"root\"></div></body>",
    "</html>"
);

async fn shell() -> Html<&'static str> {
    Html(APP_SHELL)
}

/// Page routes. Guarded prefixes (`/dashboard`, `/profile`, `/expenses`)
/// are gated by the route guard layered over this router; the auth pages
/// and the email-confirmation page are public.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(shell))
        .route("/dashboard/{*rest}", get(shell))
        .route("/profile", get(shell))
        .route("/profile/{*rest}", get(shell))
        .route("/expenses", get(shell))
        .route("/expenses/{*rest}", get(shell))
        .route("/auth/login", get(shell))
        .route("/auth/register", get(shell))
        .route("/confirm", get(shell))
}
