//! Session-token encode/decode.
//!
//! The durable session record is an HS256-signed JWT stored in the
//! `session_token` cookie. It carries the backend-issued token pair and the
//! normalized user sub-object; the signing secret is the externally supplied
//! session secret. Absence of that secret disables every session-creating
//! path rather than failing startup.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use expense_core::session::{AuthIdentity, Session, SessionUser};

/// Default session lifetime in days.
const DEFAULT_SESSION_TTL_DAYS: i64 = 30;

/// Session-token configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify session tokens.
    /// `None` disables the session paths.
    pub secret: Option<String>,
    /// Session lifetime in days (default: 30).
    pub ttl_days: i64,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `SESSION_SECRET`   | no       | --      |
    /// | `SESSION_TTL_DAYS` | no       | `30`    |
    pub fn from_env() -> Self {
        let secret = std::env::var("SESSION_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        let ttl_days: i64 = std::env::var("SESSION_TTL_DAYS")
            .unwrap_or_else(|_| DEFAULT_SESSION_TTL_DAYS.to_string())
            .parse()
            .expect("SESSION_TTL_DAYS must be a valid i64");

        Self { secret, ttl_days }
    }
}

/// Claims embedded in every session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Backend-issued access token.
    pub access_token: Option<String>,
    /// Backend-issued refresh token.
    pub refresh_token: Option<String>,
    /// Normalized user sub-object.
    pub user: SessionUser,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

impl SessionClaims {
    /// Token-propagation hook, sign-in half: copy the transient identity
    /// produced by a sign-in hook into the durable session-token
    /// representation.
    pub fn from_identity(identity: &AuthIdentity, ttl_days: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        Self {
            access_token: Some(identity.access_token.clone()),
            refresh_token: identity.refresh_token.clone(),
            user: identity.user.clone(),
            exp: now + ttl_days * 24 * 60 * 60,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Token-propagation hook, read half: project the claims onto the
    /// externally visible session record handed to the browser.
    pub fn into_session(self) -> Session {
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            user: self.user,
        }
    }
}

/// Sign a session token with the given secret.
pub fn encode_session(
    claims: &SessionClaims,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(), // HS256
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`SessionClaims`].
///
/// Validates the signature and expiration automatically.
pub fn decode_session(
    token: &str,
    secret: &str,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
