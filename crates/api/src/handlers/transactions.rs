//! Handlers for the `/api/transactions` proxy routes.

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

/// GET /api/transactions
pub async fn list(State(state): State<AppState>, auth: ForwardAuth) -> Response {
    let result = state
        .backend
        .get(paths::TRANSACTIONS, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching transactions.",
    )
}

/// POST /api/transactions
pub async fn create(
    State(state): State<AppState>,
    auth: ForwardAuth,
    Json(body): Json<Value>,
) -> Response {
    let result = state
        .backend
        .post(paths::TRANSACTIONS, &body, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::CREATED,
        "An error occurred while creating the transaction.",
    )
}

/// GET /api/transactions/statistics
pub async fn statistics(State(state): State<AppState>, auth: ForwardAuth) -> Response {
    let result = state
        .backend
        .get(paths::TRANSACTIONS_STATISTICS, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching transaction statistics.",
    )
}

/// POST /api/transactions/transfer
///
/// Normalizes the transfer form payload: `amount` is coerced to a number,
/// `exchangeRate` defaults to 1, `fees` to 0, `description` to an empty
/// string, and `transactionDate` to the current instant.
pub async fn transfer(
    State(state): State<AppState>,
    auth: ForwardAuth,
    Json(body): Json<Value>,
) -> Response {
    let payload = json!({
        "fromAccountId": body.get("fromAccountId").cloned().unwrap_or(Value::Null),
        "toAccountId": body.get("toAccountId").cloned().unwrap_or(Value::Null),
        "amount": coerce_number(body.get("amount")),
        "description": body.get("description").and_then(Value::as_str).unwrap_or(""),
        "exchangeRate": coerce_number(body.get("exchangeRate")).unwrap_or(1.0),
        "fees": coerce_number(body.get("fees")).unwrap_or(0.0),
        "transactionDate": iso_or_now(body.get("transactionDate")),
    });

    let result = state
        .backend
        .post(paths::TRANSACTIONS_TRANSFER, &payload, auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::CREATED,
        "An error occurred while transferring funds.",
    )
}

/// GET /api/transactions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
) -> Response {
    let result = state
        .backend
        .get(&format!("{}/{id}", paths::TRANSACTIONS), auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while fetching the transaction.",
    )
}

/// PUT /api/transactions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
    Json(body): Json<Value>,
) -> Response {
    let result = state
        .backend
        .put(
            &format!("{}/{id}", paths::TRANSACTIONS),
            &body,
            auth.as_deref(),
        )
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while updating the transaction.",
    )
}

/// DELETE /api/transactions/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
    auth: ForwardAuth,
) -> Response {
    let result = state
        .backend
        .delete(&format!("{}/{id}", paths::TRANSACTIONS), auth.as_deref())
        .await;
    proxy_response(
        result,
        StatusCode::OK,
        "An error occurred while deleting the transaction.",
    )
}
