//! Route definitions for the dashboard aggregation endpoint.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, method_not_allowed};
use crate::state::AppState;

/// Routes mounted at `/api/dashboard`.
///
/// ```text
/// GET / -> overview (four concurrent backend reads)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(dashboard::overview).fallback(method_not_allowed))
}
