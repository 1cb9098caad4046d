//! Domain-level error type.
//!
//! [`CoreError`] carries the failure classes that originate inside this tier
//! (as opposed to failures relayed from the backend, which the gateway crate
//! models separately). The HTTP layer maps each variant onto a status code
//! and the response envelope.

/// Errors originating in the edge tier itself.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Inbound payload failed local validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The caller is not authenticated, or sign-in was rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// A required auth path is disabled by configuration (missing session
    /// secret or OAuth credentials).
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    Internal(String),
}
