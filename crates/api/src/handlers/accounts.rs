//! Handlers for the `/api/accounts` proxy routes.
//!
//! Each handler performs exactly one backend round trip, forwarding the
//! inbound `Authorization` header unchanged.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;
use serde_json::Value;

use expense_gateway::paths;

use crate::middleware::forward_auth::ForwardAuth;
use crate::response::proxy_response;
use crate::state::AppState;

/// GET /api/accounts
pub async fn list(State(state): State<AppState>, auth: ForwardAuth) -> Response {
    let result = state.backend.get(paths::ACCOUNTS, auth.as_deref()).await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching accounts.",
    )
}

/// POST /api/accounts
pub async fn create(
    State(state): State<AppState>,
    auth: ForwardAuth,
    Json(body): Json<Value>,
) -> Response {
    let result = state
        .backend
        .post(paths::ACCOUNTS, &body, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::CREATED,
        "An error occurred while creating the account.",
    )
}

/// GET /api/accounts/summary
pub async fn summary(State(state): State<AppState>, auth: ForwardAuth) -> Response {
    let result = state
        .backend
        .get(paths::ACCOUNTS_SUMMARY, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching account summary.",
    )
}

/// GET /api/accounts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
) -> Response {
    let result = state
        .backend
        .get(&format!("{}/{id}", paths::ACCOUNTS), auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching the account.",
    )
}

/// PATCH /api/accounts/{id}
///
/// `initialBalance` is immutable after creation: the form may submit it,
/// but it is stripped from the outbound payload unconditionally.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
    Json(mut body): Json<Value>,
) -> Response {
    if let Some(map) = body.as_object_mut() {
        map.remove("initialBalance");
    }

    let result = state
        .backend
        .patch(&format!("{}/{id}", paths::ACCOUNTS), &body, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while updating the account.",
    )
}

/// DELETE /api/accounts/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
) -> Response {
    let result = state
        .backend
        .delete(&format!("{}/{id}", paths::ACCOUNTS), auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while deleting the account.",
    )
}
