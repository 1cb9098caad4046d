//! Shared domain types for the expense edge tier.
//!
//! - [`error`] -- the domain-level error type wrapped by the HTTP layer.
//! - [`session`] -- session record, transient sign-in identity, and the
//!   Google provider profile mapping.

pub mod error;
pub mod session;
