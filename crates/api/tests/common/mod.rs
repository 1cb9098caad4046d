#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use expense_api::config::{GoogleConfig, ServerConfig};
use expense_api::router::build_app_router;
use expense_api::session::token::SessionConfig;
use expense_api::state::AppState;

/// Session-signing secret shared by all integration tests.
pub const TEST_SECRET: &str = "integration-test-session-secret";

// ---------------------------------------------------------------------------
// Mock backend
// ---------------------------------------------------------------------------

/// One request as received by the mock backend.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone, Default)]
struct MockState {
    hits: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<(String, String), (u16, Value)>>>,
}

/// In-process stand-in for the finance backend.
///
/// Records every request it receives and answers from a table of canned
/// responses keyed by `(method, path)`; unknown requests get `200 {"ok":true}`.
pub struct TestBackend {
    pub addr: SocketAddr,
    state: MockState,
}

impl TestBackend {
    /// Bind to an ephemeral port and serve in the background.
    pub async fn spawn() -> Self {
        let state = MockState::default();
        let router = Router::new()
            .fallback(capture)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve mock backend");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Register a canned response for `(method, path)`.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Value) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body));
    }

    /// Everything the backend has received so far.
    pub fn hits(&self) -> Vec<RecordedRequest> {
        self.state.hits.lock().unwrap().clone()
    }

    pub fn hit_count(&self) -> usize {
        self.state.hits.lock().unwrap().len()
    }
}

/// Record the request, then answer from the response table.
async fn capture(State(state): State<MockState>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(String::from);
    let authorization = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    state.hits.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        authorization,
        body,
    });

    let canned = state.responses.lock().unwrap().get(&(method, path)).cloned();
    match canned {
        Some((status, body)) => (
            StatusCode::from_u16(status).expect("valid status"),
            Json(body),
        )
            .into_response(),
        None => Json(json!({"ok": true})).into_response(),
    }
}

// ---------------------------------------------------------------------------
// Application under test
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` pointed at the given backend URL, with the
/// session and Google paths enabled.
pub fn test_config(backend_api_url: String) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        backend_api_url,
        session: SessionConfig {
            secret: Some(TEST_SECRET.to_string()),
            ttl_days: 30,
        },
        google: Some(GoogleConfig {
            client_id: "test-client-id".to_string(),
            client_secret: "test-client-secret".to_string(),
        }),
    }
}

/// Spawn a mock backend and build the full application router against it.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery, route guard) that production uses.
pub async fn build_test_app() -> (Router, TestBackend) {
    let backend = TestBackend::spawn().await;
    let config = test_config(backend.base_url());
    let state = AppState::from_config(config.clone());
    (build_app_router(state, &config), backend)
}

/// Same as [`build_test_app`], but with a custom config transform applied
/// before the router is built (e.g. to disable the session secret).
pub async fn build_test_app_with<F>(transform: F) -> (Router, TestBackend)
where
    F: FnOnce(&mut ServerConfig),
{
    let backend = TestBackend::spawn().await;
    let mut config = test_config(backend.base_url());
    transform(&mut config);
    let state = AppState::from_config(config.clone());
    (build_app_router(state, &config), backend)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// One-shot request with optional JSON body and extra headers.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    headers: &[(&str, &str)],
) -> Response {
    let mut builder = axum::http::Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    app.oneshot(request).await.expect("response")
}

pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None, &[]).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    request(app, Method::POST, uri, Some(body), &[]).await
}

/// Collect the response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

/// All `Set-Cookie` header values of a response.
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(String::from)
        .collect()
}

/// Extract `name=value` from a `Set-Cookie` list, if the cookie was set to a
/// non-empty value.
pub fn cookie_value(cookies: &[String], name: &str) -> Option<String> {
    cookies.iter().find_map(|c| {
        let (pair, _attrs) = c.split_once(';').unwrap_or((c.as_str(), ""));
        let (cookie_name, value) = pair.split_once('=')?;
        if cookie_name == name && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}
