//! REST client for the finance backend.
//!
//! Wraps the backend HTTP API using [`reqwest`]. One client per process:
//! a base URL plus a single send path that attaches the caller's
//! `Authorization` header verbatim when one is present and classifies every
//! failure before it reaches a handler. Absence of a credential sends the
//! request as-is -- rejecting it is the backend's job.
//!
//! No retries: a single round trip decides the outcome of each call.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::Value;

use crate::error::GatewayError;

/// Default outbound request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Format a resolved bearer token into an `Authorization` header value.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP client for the finance backend.
pub struct BackendClient {
    client: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a new client for the backend at `base_url`
    /// (e.g. `http://localhost:5000/api/v1`).
    ///
    /// # Panics
    ///
    /// Panics at startup if the underlying TLS backend cannot be
    /// initialized, matching [`reqwest::Client::new`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("Failed to build backend HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for custom timeouts and for tests).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Backend base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base_url}{path}`.
    pub async fn get(&self, path: &str, authorization: Option<&str>) -> Result<Value, GatewayError> {
        self.send(Method::GET, path, None, authorization).await
    }

    /// `POST {base_url}{path}` with a JSON body.
    pub async fn post(
        &self,
        path: &str,
        body: &Value,
        authorization: Option<&str>,
    ) -> Result<Value, GatewayError> {
        self.send(Method::POST, path, Some(body), authorization).await
    }

    /// `PUT {base_url}{path}` with a JSON body.
    pub async fn put(
        &self,
        path: &str,
        body: &Value,
        authorization: Option<&str>,
    ) -> Result<Value, GatewayError> {
        self.send(Method::PUT, path, Some(body), authorization).await
    }

    /// `PATCH {base_url}{path}` with a JSON body.
    pub async fn patch(
        &self,
        path: &str,
        body: &Value,
        authorization: Option<&str>,
    ) -> Result<Value, GatewayError> {
        self.send(Method::PATCH, path, Some(body), authorization).await
    }

    /// `DELETE {base_url}{path}`.
    pub async fn delete(
        &self,
        path: &str,
        authorization: Option<&str>,
    ) -> Result<Value, GatewayError> {
        self.send(Method::DELETE, path, None, authorization).await
    }

    // ---- private helpers ----

    /// The single send path. Attaches the `Authorization` header when a
    /// credential is present, then classifies the outcome.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        authorization: Option<&str>,
    ) -> Result<Value, GatewayError> {
        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, path));

        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::classify(response).await
    }

    /// Turn a received response into the payload or a classified error.
    ///
    /// 2xx bodies are returned verbatim as JSON (an empty body becomes
    /// `null`, a non-JSON body becomes a string). Non-2xx responses yield
    /// [`GatewayError::Backend`] with the `message` field extracted from the
    /// error body when present.
    async fn classify(response: reqwest::Response) -> Result<Value, GatewayError> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            if text.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)));
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from));

        match status.as_u16() {
            401 => tracing::error!("Unauthorized access"),
            403 => tracing::error!("Forbidden"),
            404 => tracing::error!("Resource not found"),
            500 => tracing::error!("Server error"),
            other => tracing::error!(status = other, body = %body, "Unexpected backend error"),
        }

        Err(GatewayError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}
