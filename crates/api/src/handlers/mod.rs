//! HTTP handlers for the `/api` surface.

pub mod accounts;
pub mod auth;
pub mod budgets;
pub mod dashboard;
pub mod transactions;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::SecondsFormat;
use serde_json::Value;

use crate::response::Envelope;

/// Fallback for any verb a route does not accept.
///
/// Always local: no outbound call is made for a rejected method.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(Envelope::fail("Method not allowed")),
    )
        .into_response()
}

/// Coerce a JSON scalar to a number: numbers pass through, numeric strings
/// are parsed, everything else is `None`.
pub(crate) fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Re-encode a timestamp field as ISO-8601 UTC, defaulting to the current
/// instant when the field is absent or unparseable.
pub(crate) fn iso_or_now(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .unwrap_or_else(chrono::Utc::now)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}
