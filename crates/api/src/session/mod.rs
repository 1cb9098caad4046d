//! Session-token lifecycle.
//!
//! - [`token`] -- encode/decode of the signed session JWT (the durable
//!   session record).
//! - [`hooks`] -- sign-in, sign-out, and token-propagation callbacks.
//! - [`resolver`] -- bearer-credential resolution (cookie first, session
//!   fallback).
//! - [`cookies`] -- construction and clearing of the auth cookies.

pub mod cookies;
pub mod hooks;
pub mod resolver;
pub mod token;

/// Cookie holding the bearer access token after credential sign-in.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Cookie holding the refresh token after credential sign-in.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh_token";

/// Cookie holding the signed session JWT.
pub const SESSION_COOKIE: &str = "session_token";
