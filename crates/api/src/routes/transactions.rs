//! Route definitions for the `/api/transactions` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{method_not_allowed, transactions};
use crate::state::AppState;

/// Routes mounted at `/api/transactions`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /statistics    -> statistics
/// POST   /transfer      -> transfer
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// ```
///
/// Any other verb answers 405 with the failure envelope, locally.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(transactions::list)
                .post(transactions::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/statistics",
            get(transactions::statistics).fallback(method_not_allowed),
        )
        .route(
            "/transfer",
            post(transactions::transfer).fallback(method_not_allowed),
        )
        .route(
            "/{id}",
            get(transactions::get_by_id)
                .put(transactions::update)
                .delete(transactions::delete)
                .fallback(method_not_allowed),
        )
}
