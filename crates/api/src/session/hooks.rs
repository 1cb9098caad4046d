//! Session lifecycle hooks.
//!
//! Callbacks run at the sign-in and sign-out points of the auth flow. Hooks
//! swallow backend and transport failures and degrade to "authentication
//! failed" (a `None` identity); the sign-in flow never sees a raw transport
//! error.

use std::sync::Arc;

use serde_json::{json, Value};

use expense_core::session::{AuthIdentity, GoogleProfile, SessionUser};
use expense_gateway::{bearer, paths, BackendClient};

/// Credential sign-in hook.
///
/// Forwards the email/password pair to the backend login endpoint. A
/// response carrying an access token yields the user identity merged with
/// the token pair; any other outcome (transport error, backend rejection,
/// missing token) yields `None`.
pub async fn authorize_credentials(
    backend: &BackendClient,
    email: &str,
    password: &str,
) -> Option<AuthIdentity> {
    let body = json!({ "email": email, "password": password });

    let payload = match backend.post(paths::AUTH_LOGIN, &body, None).await {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "Login error");
            return None;
        }
    };

    identity_from_auth_payload(&payload)
}

/// OAuth sign-in hook (provider = Google).
///
/// Maps the provider profile onto the backend's Google-auth DTO and posts
/// it to the backend, authenticated with the provider's own id-token. On
/// success the in-flight identity is populated with the backend-issued
/// tokens and user record, filled out with the provider profile where the
/// backend record is silent. `None` rejects the sign-in and blocks session
/// creation.
pub async fn google_sign_in(
    backend: &BackendClient,
    profile: &GoogleProfile,
    id_token: &str,
) -> Option<AuthIdentity> {
    let dto = profile.to_backend_dto();
    let authorization = bearer(id_token);

    let payload = match backend.post(paths::AUTH_GOOGLE, &dto, Some(&authorization)).await {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!(error = %err, "Google auth error");
            return None;
        }
    };

    let mut identity = identity_from_auth_payload(&payload)?;

    if identity.user.email.is_none() {
        identity.user.email = profile.email.clone();
    }
    if identity.user.name.is_none() {
        identity.user.name = provider_display_name(profile);
    }
    if identity.user.image.is_none() {
        identity.user.image = profile.picture.clone();
    }

    Some(identity)
}

/// Sign-out hook: best-effort backend token revocation.
///
/// Fire-and-forget: a failure to reach the backend is logged and never
/// blocks local session clearing.
pub fn sign_out(backend: Arc<BackendClient>, authorization: Option<String>) {
    tokio::spawn(async move {
        if let Err(err) = backend
            .post(paths::AUTH_LOGOUT, &json!({}), authorization.as_deref())
            .await
        {
            tracing::warn!(error = %err, "Backend logout failed");
        }
    });
}

/// Build an [`AuthIdentity`] from a backend auth payload.
///
/// Requires an `accessToken`; everything else is optional.
fn identity_from_auth_payload(payload: &Value) -> Option<AuthIdentity> {
    let access_token = payload.get("accessToken")?.as_str()?.to_string();
    let refresh_token = payload
        .get("refreshToken")
        .and_then(Value::as_str)
        .map(String::from);

    let user = payload.get("user").map(session_user_from_value).unwrap_or_default();

    Some(AuthIdentity {
        user,
        access_token,
        refresh_token,
    })
}

/// Normalize a backend user record onto the session user sub-object.
///
/// Ids may arrive as strings or numbers; both become strings.
fn session_user_from_value(user: &Value) -> SessionUser {
    SessionUser {
        id: user.get("id").map(stringify_scalar).unwrap_or_default(),
        email: user
            .get("email")
            .and_then(Value::as_str)
            .map(String::from),
        name: user.get("name").and_then(Value::as_str).map(String::from),
        image: user
            .get("image")
            .and_then(Value::as_str)
            .map(String::from),
    }
}

fn stringify_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn provider_display_name(profile: &GoogleProfile) -> Option<String> {
    match (&profile.given_name, &profile.family_name) {
        (Some(given), Some(family)) => Some(format!("{given} {family}")),
        (Some(given), None) => Some(given.clone()),
        (None, Some(family)) => Some(family.clone()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_requires_access_token() {
        let payload = json!({"user": {"id": "u1"}});
        assert!(identity_from_auth_payload(&payload).is_none());
    }

    #[test]
    fn identity_merges_user_and_tokens() {
        let payload = json!({
            "accessToken": "at",
            "refreshToken": "rt",
            "user": {"id": 42, "email": "ada@example.com", "name": "Ada"}
        });

        let identity = identity_from_auth_payload(&payload).expect("identity");
        assert_eq!(identity.access_token, "at");
        assert_eq!(identity.refresh_token.as_deref(), Some("rt"));
        assert_eq!(identity.user.id.as_deref(), Some("42"));
        assert_eq!(identity.user.email.as_deref(), Some("ada@example.com"));
    }

    #[test]
    fn display_name_composes_from_profile() {
        let profile = GoogleProfile {
            given_name: Some("Ada".into()),
            family_name: Some("Lovelace".into()),
            ..Default::default()
        };
        assert_eq!(provider_display_name(&profile).as_deref(), Some("Ada Lovelace"));
    }
}
