use std::sync::Arc;

use expense_gateway::BackendClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Nothing here is
/// mutable across requests; the session store lives entirely in the
/// browser's cookie jar.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (session secret, Google credentials, CORS).
    pub config: Arc<ServerConfig>,
    /// Outbound client for the finance backend.
    pub backend: Arc<BackendClient>,
}

impl AppState {
    /// Build state from configuration, constructing the backend client
    /// against the configured base URL.
    pub fn from_config(config: ServerConfig) -> Self {
        let backend = Arc::new(BackendClient::new(config.backend_api_url.clone()));
        Self {
            config: Arc::new(config),
            backend,
        }
    }
}
