//! Extractor for the inbound `Authorization` header.
//!
//! Proxy routes forward whatever credential the browser sent, unchanged --
//! they never re-resolve the token themselves. Absence is forwarded too:
//! the backend owns the rejection.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

/// The raw inbound `Authorization` header value, if any.
///
/// ```ignore
/// async fn list(State(state): State<AppState>, auth: ForwardAuth) -> Response {
///     let result = state.backend.get(paths::ACCOUNTS, auth.as_deref()).await;
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ForwardAuth(pub Option<String>);

impl ForwardAuth {
    /// Header value as a borrowed string, ready for the gateway client.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl<S> FromRequestParts<S> for ForwardAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        Ok(ForwardAuth(value))
    }
}
