//! Outbound HTTP client for the finance backend REST API.
//!
//! [`BackendClient`] is the single egress point of the edge tier: every
//! outbound call goes through one send path that attaches the caller's
//! credential and applies uniform failure classification. The backend owns
//! all persistence, validation, and computation; this crate only moves
//! requests and responses across.

pub mod client;
pub mod error;
pub mod paths;

pub use client::{bearer, BackendClient};
pub use error::GatewayError;
