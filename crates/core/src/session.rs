//! Session-record types.
//!
//! The session framework hands the browser a single externally visible
//! object per signed-in user: the [`Session`] record. Sign-in hooks produce
//! a transient [`AuthIdentity`] first; the token-propagation hook copies it
//! into the durable session token, and every subsequent session read
//! projects the token back onto a [`Session`].

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Normalized user sub-object embedded in the session record.
///
/// All fields are optional: the backend decides which of them a given user
/// record carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// The externally visible session record handed to the browser.
///
/// Serialized camelCase: `{accessToken, refreshToken, user}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

/// Transient identity produced by a sign-in hook.
///
/// Exists only for the duration of the sign-in request, between the backend
/// token exchange and the token-propagation hook.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    pub user: SessionUser,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Identity profile received from the Google OAuth provider.
///
/// Field names follow the provider's claim names verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoogleProfile {
    pub sub: Option<String>,
    pub email: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub picture: Option<String>,
}

impl GoogleProfile {
    /// Map the provider profile onto the backend's Google-auth DTO.
    pub fn to_backend_dto(&self) -> Value {
        json!({
            "googleId": self.sub,
            "email": self.email,
            "firstName": self.given_name,
            "lastName": self.family_name,
            "profileImage": self.picture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_profile_maps_to_backend_dto() {
        let profile = GoogleProfile {
            sub: Some("108234".into()),
            email: Some("ada@example.com".into()),
            given_name: Some("Ada".into()),
            family_name: Some("Lovelace".into()),
            picture: Some("https://lh3.example/photo.jpg".into()),
        };

        let dto = profile.to_backend_dto();
        assert_eq!(dto["googleId"], "108234");
        assert_eq!(dto["email"], "ada@example.com");
        assert_eq!(dto["firstName"], "Ada");
        assert_eq!(dto["lastName"], "Lovelace");
        assert_eq!(dto["profileImage"], "https://lh3.example/photo.jpg");
    }

    #[test]
    fn session_serializes_camel_case() {
        let session = Session {
            access_token: Some("at".into()),
            refresh_token: None,
            user: SessionUser::default(),
        };

        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["accessToken"], "at");
        assert!(value["refreshToken"].is_null());
        assert!(value["user"].is_object());
    }
}
