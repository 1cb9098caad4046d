//! Failure classification for outbound backend calls.
//!
//! Three classes: the backend answered with a non-2xx status, the request
//! timed out, or no response was received at all. Callers translate these
//! into the response envelope; nothing here reaches the browser as a raw
//! transport error.

/// Errors from the backend gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The backend did not answer within the client timeout.
    #[error("Request timeout. Please try again.")]
    Timeout,

    /// No response was received (DNS, connect, TLS, or mid-body failure).
    #[error("Network error. Please check your connection.")]
    Network(#[source] reqwest::Error),

    /// The backend answered with a non-2xx status code.
    #[error("Backend error ({status})")]
    Backend {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `message` field extracted from the backend error body, if any.
        message: Option<String>,
    },
}

impl GatewayError {
    /// Status code of a backend rejection. `None` for timeout/network
    /// failures, where no response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Backend { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Backend-supplied error message, if the error body carried one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            GatewayError::Backend { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::error!("Request timeout");
            GatewayError::Timeout
        } else {
            tracing::error!(error = %err, "Network error");
            GatewayError::Network(err)
        }
    }
}
