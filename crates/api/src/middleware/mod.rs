//! Request-level middleware.
//!
//! - [`forward_auth`] -- extractor for the inbound `Authorization` header.
//! - [`guard`] -- the route guard over protected page navigation.

pub mod forward_auth;
pub mod guard;
