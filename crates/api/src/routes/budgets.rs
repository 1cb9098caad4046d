//! Route definitions for the `/api/budgets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{budgets, method_not_allowed};
use crate::state::AppState;

/// Routes mounted at `/api/budgets`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /summary   -> summary
/// GET    /alerts    -> alerts
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
            get(budgets::list)
                .post(budgets::create)
                .fallback(method_not_allowed),
        )
        .route(
            "/summary",
            get(budgets::summary).fallback(method_not_allowed),
        )
        .route("/alerts", get(budgets::alerts).fallback(method_not_allowed))
        .route(
            "/{id}",
            get(budgets::get_by_id)
                .patch(budgets::update)
                .delete(budgets::delete)
                .fallback(method_not_allowed),
        )
}
