//! Route definitions for the `/api/accounts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{accounts, method_not_allowed};
use crate::state::AppState;

/// Routes mounted at `/api/accounts`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /summary   -> summary
/// GET    /{id}      -> get_by_id
/// PATCH  /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
///
/// Any other verb answers 405 with the failure envelope, locally.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(accounts::list)
                .post(accounts::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/summary",
            get(accounts::summary).fallback(method_not_allowed),
        )
        .route(
            "/{id}",
            get(accounts::get_by_id)
                .patch(accounts::update)
                .delete(accounts::delete)
                .fallback(method_not_allowed),
        )
}
