//! Handlers for the `/api/budgets` proxy routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::{json, Value};

use expense_gateway::paths;

use super::{coerce_number, iso_or_now};
use crate::middleware::forward_auth::ForwardAuth;
use crate::response::proxy_response;
use crate::state::AppState;

/// GET /api/budgets
pub async fn list(State(state): State<AppState>, auth: ForwardAuth) -> Response {
    let result = state.backend.get(paths::BUDGETS, auth.as_deref()).await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching budgets.",
    )
}

/// POST /api/budgets
///
/// Normalizes the form payload before it leaves: `amount` is coerced to a
/// number, and `startDate`/`endDate` default to the current instant
/// (ISO-8601) when the form omits them.
pub async fn create(
    State(state): State<AppState>,
    auth: ForwardAuth,
    Json(body): Json<Value>,
) -> Response {
    let payload = json!({
        "name": body.get("name").cloned().unwrap_or(Value::Null),
        "category": body.get("category").cloned().unwrap_or(Value::Null),
        "amount": coerce_number(body.get("amount")),
        "period": body.get("period").cloned().unwrap_or(Value::Null),
        "startDate": iso_or_now(body.get("startDate")),
        "endDate": iso_or_now(body.get("endDate")),
    });

    let result = state
        .backend
        .post(paths::BUDGETS, &payload, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::CREATED,
        "An error occurred while creating the budget.",
    )
}

/// GET /api/budgets/summary
pub async fn summary(State(state): State<AppState>, auth: ForwardAuth) -> Response {
    let result = state
        .backend
        .get(paths::BUDGETS_SUMMARY, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching budget summary.",
    )
}

/// GET /api/budgets/alerts
pub async fn alerts(State(state): State<AppState>, auth: ForwardAuth) -> Response {
    let result = state
        .backend
        .get(paths::BUDGETS_ALERTS, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching budget alerts.",
    )
}

/// GET /api/budgets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
) -> Response {
    let result = state
        .backend
        .get(&format!("{}/{id}", paths::BUDGETS), auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching the budget.",
    )
}

/// PATCH /api/budgets/{id}
///
/// The backend's budget update endpoint is PUT; the inbound surface stays
/// PATCH for consistency with accounts.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
    Json(body): Json<Value>,
) -> Response {
    let result = state
        .backend
        .put(&format!("{}/{id}", paths::BUDGETS), &body, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while updating the budget.",
    )
}

/// DELETE /api/budgets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
) -> Response {
    let result = state
        .backend
        .delete(&format!("{}/{id}", paths::BUDGETS), auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while deleting the budget.",
    )
}
