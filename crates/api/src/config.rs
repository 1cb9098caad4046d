use crate::session::token::SessionConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the finance backend REST API.
    pub backend_api_url: String,
    /// Session-token configuration (signing secret, lifetime).
    pub session: SessionConfig,
    /// Google OAuth credentials. `None` disables the Google sign-in path.
    pub google: Option<GoogleConfig>,
}

/// Google OAuth client credentials.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Required | Default                          |
    /// |------------------------|----------|----------------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`                        |
    /// | `PORT`                 | no       | `3000`                           |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:3000`          |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                             |
    /// | `BACKEND_API_URL`      | no       | `http://localhost:5000/api/v1`   |
    /// | `SESSION_SECRET`       | no       | -- (absence disables sessions)   |
    /// | `SESSION_TTL_DAYS`     | no       | `30`                             |
    /// | `GOOGLE_CLIENT_ID`     | no       | -- (absence disables Google)     |
    /// | `GOOGLE_CLIENT_SECRET` | no       | -- (absence disables Google)     |
    ///
    /// The optional values are checked for presence only; a path whose
    /// credentials are absent is disabled rather than rejected at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let backend_api_url = std::env::var("BACKEND_API_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api/v1".into());

        let session = SessionConfig::from_env();

        let google = match (
            std::env::var("GOOGLE_CLIENT_ID"),
            std::env::var("GOOGLE_CLIENT_SECRET"),
        ) {
            (Ok(client_id), Ok(client_secret)) => Some(GoogleConfig {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            backend_api_url,
            session,
            google,
        }
    }
}
