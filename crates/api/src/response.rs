//! Shared response envelope for the `/api` surface.
//!
//! Every proxy route answers with the `{success, data|message}` envelope,
//! regardless of the backend's native response shape. Use [`Envelope`] plus
//! [`proxy_response`] instead of ad-hoc `serde_json::json!` construction so
//! all routes normalize backend results identically.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use expense_gateway::GatewayError;

/// Standard `{success, data?, message?}` response envelope.
///
/// Invariants: `success == true` implies `data` is present and reflects the
/// backend payload verbatim; `success == false` implies `message` is a
/// human-readable string.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// Successful envelope wrapping `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }
}

impl Envelope<()> {
    /// Failure envelope carrying a human-readable message.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Normalize a single backend round trip into an envelope response.
///
/// Success maps the payload verbatim at `success_status`. Failure maps the
/// backend's status (500 when no response was received) with the
/// backend-supplied message, falling back to `fallback` when the backend
/// error body carried none.
pub fn proxy_response(
    result: Result<Value, GatewayError>,
    success_status: StatusCode,
    fallback: &str,
) -> Response {
    match result {
        Ok(payload) => (success_status, Json(Envelope::ok(payload))).into_response(),
        Err(err) => failure_response(&err, fallback),
    }
}

/// Render a gateway failure as an envelope response.
///
/// Backend rejections keep their status and message; timeout and network
/// failures surface at 500 with their own distinct messages so the browser
/// can tell them apart from a backend-originated rejection.
pub fn failure_response(err: &GatewayError, fallback: &str) -> Response {
    let status = err
        .status()
        .and_then(|s| StatusCode::from_u16(s).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let message = match err {
        GatewayError::Backend { message, .. } => {
            message.clone().unwrap_or_else(|| fallback.to_string())
        }
        other => other.to_string(),
    };

    (status, Json(Envelope::fail(message))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ok_envelope_skips_message() {
        let value = serde_json::to_value(Envelope::ok(json!({"id": 1}))).unwrap();
        assert_eq!(value, json!({"success": true, "data": {"id": 1}}));
    }

    #[test]
    fn fail_envelope_skips_data() {
        let value = serde_json::to_value(Envelope::fail("nope")).unwrap();
        assert_eq!(value, json!({"success": false, "message": "nope"}));
    }
}
