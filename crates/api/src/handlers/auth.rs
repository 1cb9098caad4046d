//! Handlers for the `/api/auth` surface: registration and email-confirmation
//! proxies, plus the session lifecycle endpoints (sign-in callbacks, session
//! read, sign-out).

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationErrors};

use expense_core::error::CoreError;
use expense_core::session::GoogleProfile;
use expense_gateway::{bearer, paths};

use crate::error::{AppError, AppResult};
use crate::response::{proxy_response, Envelope};
use crate::session::resolver::resolve_token;
use crate::session::token::{decode_session, encode_session, SessionClaims};
use crate::session::{cookies, hooks, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE, SESSION_COOKIE};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name is too short"))]
    pub username: String,
    #[validate(length(min = 2, message = "First name is too short"))]
    pub first_name: String,
    #[validate(length(min = 2, message = "Last name is too short"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request body for `POST /api/auth/callback/credentials`.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Request body for `POST /api/auth/callback/google`.
///
/// The provider handshake itself is owned by the external auth framework;
/// this endpoint receives its outcome: the verified profile plus the
/// provider's id-token.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleCallbackRequest {
    pub profile: GoogleProfile,
    pub id_token: String,
}

/// Query parameters for `POST /api/auth/confirm-email`.
#[derive(Debug, Deserialize)]
pub struct ConfirmEmailQuery {
    pub token: Option<String>,
}

// ---------------------------------------------------------------------------
// Proxy handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Validates the form payload locally (the backend remains authoritative
/// for uniqueness and everything else), then forwards it unauthenticated.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Response> {
    if let Err(errors) = input.validate() {
        return Err(CoreError::Validation(first_validation_message(&errors)).into());
    }

    let body = serde_json::to_value(&input)
        .map_err(|e| AppError::Internal(format!("Register payload error: {e}")))?;

    let result = state.backend.post(paths::AUTH_REGISTER, &body, None).await;
    Ok(proxy_response(result, StatusCode::OK, "Registration failed"))
}

/// POST /api/auth/confirm-email?token=...
pub async fn confirm_email(
    State(state): State<AppState>,
    Query(query): Query<ConfirmEmailQuery>,
) -> AppResult<Response> {
    let token = query
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CoreError::Validation("Token is required".into()))?;

    let path = format!(
        "{}?token={}",
        paths::AUTH_CONFIRM_EMAIL,
        urlencoding::encode(&token)
    );
    let result = state
        .backend
        .post(&path, &serde_json::json!({}), None)
        .await;
    Ok(proxy_response(
        result,
        StatusCode::OK,
        "Email confirmation failed",
    ))
}

// ---------------------------------------------------------------------------
// Session lifecycle handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/callback/credentials
///
/// Credential sign-in. On success, sets the session cookie plus the
/// frontend-readable token cookies and returns the session record. A
/// rejected sign-in clears any stale credentials and yields 401 -- the
/// flow never surfaces a transport error.
pub async fn callback_credentials(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Response> {
    if let Err(errors) = input.validate() {
        return Err(CoreError::Validation(first_validation_message(&errors)).into());
    }
    let secret = session_secret(&state)?;

    // Stale credentials from a previous session never survive a new attempt.
    let jar = cookies::clear_auth_cookies(jar);

    let identity =
        match hooks::authorize_credentials(&state.backend, &input.email, &input.password).await {
            Some(identity) => identity,
            None => {
                return Ok((
                    jar,
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(Envelope::fail("Invalid email or password")),
                    ),
                )
                    .into_response());
            }
        };

    let ttl_days = state.config.session.ttl_days;
    let claims = SessionClaims::from_identity(&identity, ttl_days);
    let token = encode_session(&claims, &secret)
        .map_err(|e| AppError::Internal(format!("Session token error: {e}")))?;

    let mut jar = jar
        .add(cookies::session_cookie(token, ttl_days))
        .add(cookies::token_cookie(
            ACCESS_TOKEN_COOKIE,
            identity.access_token.clone(),
            ttl_days,
        ));
    if let Some(refresh) = &identity.refresh_token {
        jar = jar.add(cookies::token_cookie(
            REFRESH_TOKEN_COOKIE,
            refresh.clone(),
            ttl_days,
        ));
    }

    Ok((jar, Json(Envelope::ok(claims.into_session()))).into_response())
}

/// POST /api/auth/callback/google
///
/// Google sign-in completion. The backend-issued tokens live only in the
/// session record here -- no frontend token cookies are set for the OAuth
/// flow.
pub async fn callback_google(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(input): Json<GoogleCallbackRequest>,
) -> AppResult<Response> {
    if state.config.google.is_none() {
        return Err(CoreError::Unavailable("Google sign-in is not configured".into()).into());
    }
    let secret = session_secret(&state)?;

    let jar = cookies::clear_auth_cookies(jar);

    let identity =
        match hooks::google_sign_in(&state.backend, &input.profile, &input.id_token).await {
            Some(identity) => identity,
            None => {
                return Ok((
                    jar,
                    (
                        StatusCode::UNAUTHORIZED,
                        Json(Envelope::fail("Google authentication failed")),
                    ),
                )
                    .into_response());
            }
        };

    let ttl_days = state.config.session.ttl_days;
    let claims = SessionClaims::from_identity(&identity, ttl_days);
    let token = encode_session(&claims, &secret)
        .map_err(|e| AppError::Internal(format!("Session token error: {e}")))?;

    let jar = jar.add(cookies::session_cookie(token, ttl_days));
    Ok((jar, Json(Envelope::ok(claims.into_session()))).into_response())
}

/// GET /api/auth/session
///
/// Project the session token onto the externally visible session record.
/// An absent or invalid session resolves to `data: null` -- being signed
/// out is not an error.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Response {
    let session = state
        .config
        .session
        .secret
        .as_deref()
        .and_then(|secret| {
            let cookie = jar.get(SESSION_COOKIE)?;
            decode_session(cookie.value(), secret).ok()
        })
        .map(SessionClaims::into_session);

    let data = session
        .and_then(|s| serde_json::to_value(s).ok())
        .unwrap_or(Value::Null);
    Json(Envelope::ok(data)).into_response()
}

/// POST /api/auth/signout
///
/// Fires a best-effort backend logout (failure is logged, never blocks),
/// then clears all auth cookies.
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let authorization =
        resolve_token(&jar, &state.config.session).map(|token| bearer(&token));
    hooks::sign_out(Arc::clone(&state.backend), authorization);

    let jar = cookies::clear_auth_cookies(jar);
    (jar, Json(Envelope::ok(Value::Null))).into_response()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn session_secret(state: &AppState) -> Result<String, AppError> {
    state
        .config
        .session
        .secret
        .clone()
        .ok_or_else(|| CoreError::Unavailable("Session support is not configured".into()).into())
}

/// First human-readable message out of a validation failure.
fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| "Invalid input".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_extracted() {
        let input = RegisterRequest {
            username: "a".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "longenough".into(),
        };

        let errors = input.validate().expect_err("username too short");
        assert_eq!(first_validation_message(&errors), "Name is too short");
    }

    #[test]
    fn valid_register_payload_passes() {
        let input = RegisterRequest {
            username: "ada".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
        };
        assert!(input.validate().is_ok());
    }
}
