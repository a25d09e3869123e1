//! Axum-based mock of a Sanctum login backend
//!
//! Each test starts its own server on an ephemeral port so tests can run in
//! parallel without sharing state.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// How the mock login endpoint answers
#[derive(Clone, Debug)]
pub enum LoginReply {
    /// 200 with this JSON body
    Json(Value),
    /// This status with a small JSON error body
    Status(StatusCode),
    /// 200 with a body that is not JSON
    NotJson,
}

#[derive(Clone, Debug)]
pub struct MockBackendConfig {
    /// `Set-Cookie` headers sent by the cookie-issuance endpoint, in order
    pub set_cookies: Vec<String>,
    pub login_reply: LoginReply,
    /// Answer 419 when the login request carries no session key, like Laravel does
    pub require_session: bool,
    pub register_status: StatusCode,
}

impl Default for MockBackendConfig {
    fn default() -> Self {
        Self {
            set_cookies: vec![
                "XSRF-TOKEN=eyJpdiI6InRva2VuIn0%3D; expires=Thu, 01 Jan 2099 00:00:00 GMT; Max-Age=7200; path=/; samesite=lax".to_string(),
                "laravel_session=mocksession; expires=Thu, 01 Jan 2099 00:00:00 GMT; Max-Age=7200; path=/; httponly; samesite=lax".to_string(),
            ],
            login_reply: LoginReply::Json(serde_json::json!({
                "access_token": "abc",
                "name": "Alice"
            })),
            require_session: false,
            register_status: StatusCode::CREATED,
        }
    }
}

/// A request seen by the mock backend
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub cookie: Option<String>,
    pub xsrf_token: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone)]
struct MockState {
    config: MockBackendConfig,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockState {
    fn record(&self, path: &str, headers: &HeaderMap, body: Option<Value>) {
        let header_str = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let request = RecordedRequest {
            path: path.to_string(),
            cookie: header_str(header::COOKIE.as_str()),
            xsrf_token: header_str("x-xsrf-token"),
            content_type: header_str(header::CONTENT_TYPE.as_str()),
            body,
        };
        self.requests
            .lock()
            .expect("mock state lock poisoned")
            .push(request);
    }
}

pub struct MockBackend {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockBackend {
    pub async fn start(config: MockBackendConfig) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            config,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/sanctum/csrf-cookie", get(csrf_cookie))
            .route("/api/login", post(login))
            .route("/api/register", post(register))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Listener has an address");

        tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Mock backend stopped unexpectedly");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .expect("mock state lock poisoned")
            .clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

/// A base URL where nothing is listening
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind spare listener");
    let addr = listener.local_addr().expect("Listener has an address");
    drop(listener);
    format!("http://{addr}")
}

async fn csrf_cookie(State(state): State<MockState>, headers: HeaderMap) -> Response {
    state.record("/sanctum/csrf-cookie", &headers, None);

    let mut response = StatusCode::NO_CONTENT.into_response();
    for cookie in &state.config.set_cookies {
        let value = cookie.parse().expect("Mock cookie is a valid header value");
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

async fn login(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("/api/login", &headers, Some(body));

    let has_session = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|c| c.strip_prefix("laravel_session="))
        .is_some_and(|v| !v.is_empty());

    if state.config.require_session && !has_session {
        return (
            StatusCode::from_u16(419).expect("419 is a valid status"),
            Json(serde_json::json!({"message": "CSRF token mismatch."})),
        )
            .into_response();
    }

    match &state.config.login_reply {
        LoginReply::Json(value) => Json(value.clone()).into_response(),
        LoginReply::Status(status) => (
            *status,
            Json(serde_json::json!({"message": "These credentials do not match our records."})),
        )
            .into_response(),
        LoginReply::NotJson => (StatusCode::OK, "<html>oops</html>").into_response(),
    }
}

async fn register(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    state.record("/api/register", &headers, Some(body));
    (
        state.config.register_status,
        Json(serde_json::json!({"message": "ok"})),
    )
        .into_response()
}
