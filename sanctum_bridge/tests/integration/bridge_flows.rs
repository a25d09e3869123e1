/// Login, session read, guard and logout through `AuthBridge`
use crate::common::{LoginReply, MockBackend, MockBackendConfig, backend_client};
use http::StatusCode;
use http::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};
use sanctum_bridge::{
    AuthBridge, AuthFailure, BridgeError, Credentials, InMemoryTokenStore, RouteGuard,
    SessionConfig,
};
use std::sync::Arc;

fn bridge(base_url: &str) -> AuthBridge {
    AuthBridge::new(
        backend_client(base_url),
        Arc::new(InMemoryTokenStore::new()),
        SessionConfig::new("sid", 600),
        RouteGuard::new(["/dashboard"]),
    )
}

fn alice() -> Credentials {
    Credentials::new("alice@example.com", "abc12345!")
}

fn request_headers(session_id: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        COOKIE,
        HeaderValue::from_str(&format!("sid={session_id}")).expect("valid cookie"),
    );
    headers
}

#[tokio::test]
async fn test_login_opens_session() {
    let backend = MockBackend::start(MockBackendConfig::default()).await;
    let bridge = bridge(&backend.base_url);

    let outcome = bridge.login(&alice(), None).await.expect("login succeeds");

    assert_eq!(outcome.session.access_token.as_deref(), Some("abc"));
    let cookie = outcome
        .headers
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .expect("Set-Cookie present");
    assert!(cookie.starts_with(&format!("sid={};", outcome.session_id)));

    // The session read back is the same projection
    let session = bridge
        .get_session(&outcome.session_id)
        .await
        .expect("no error")
        .expect("session stored");
    assert_eq!(session, outcome.session);
}

#[tokio::test]
async fn test_guard_follows_login_and_logout() {
    let backend = MockBackend::start(MockBackendConfig::default()).await;
    let bridge = bridge(&backend.base_url);

    let outcome = bridge.login(&alice(), None).await.expect("login succeeds");
    let headers = request_headers(&outcome.session_id);

    let (allowed, _) = bridge
        .authorize("/dashboard", &headers)
        .await
        .expect("no error");
    assert!(allowed);

    bridge
        .logout(Some(&outcome.session_id))
        .await
        .expect("logout succeeds");

    let (allowed, _) = bridge
        .authorize("/dashboard", &headers)
        .await
        .expect("no error");
    assert!(!allowed);
}

#[tokio::test]
async fn test_declined_login_creates_no_session() {
    let config = MockBackendConfig {
        login_reply: LoginReply::Status(StatusCode::UNAUTHORIZED),
        ..MockBackendConfig::default()
    };
    let backend = MockBackend::start(config).await;
    let bridge = bridge(&backend.base_url);

    let result = bridge.login(&alice(), None).await;

    assert!(matches!(
        result,
        Err(BridgeError::Authentication(AuthFailure::Declined { status }))
            if status == StatusCode::UNAUTHORIZED
    ));
}

#[tokio::test]
async fn test_failed_relogin_drops_previous_token() {
    // Two bridges over one store: the first backend accepts, the second declines
    let store = Arc::new(InMemoryTokenStore::new());
    let accepting = MockBackend::start(MockBackendConfig::default()).await;
    let declining = MockBackend::start(MockBackendConfig {
        login_reply: LoginReply::Status(StatusCode::UNAUTHORIZED),
        ..MockBackendConfig::default()
    })
    .await;

    let first_bridge = AuthBridge::new(
        backend_client(&accepting.base_url),
        store.clone(),
        SessionConfig::new("sid", 600),
        RouteGuard::new(["/dashboard"]),
    );
    let retry_bridge = AuthBridge::new(
        backend_client(&declining.base_url),
        store,
        SessionConfig::new("sid", 600),
        RouteGuard::new(["/dashboard"]),
    );

    let first = first_bridge
        .login(&alice(), None)
        .await
        .expect("login succeeds");

    let result = retry_bridge
        .login(&alice(), Some(&first.session_id))
        .await;

    assert!(matches!(result, Err(BridgeError::Authentication(_))));
    assert!(
        first_bridge
            .get_token(&first.session_id)
            .await
            .expect("no error")
            .is_none()
    );
}

#[tokio::test]
async fn test_each_login_gets_a_new_session_id() {
    let backend = MockBackend::start(MockBackendConfig::default()).await;
    let bridge = bridge(&backend.base_url);

    let first = bridge.login(&alice(), None).await.expect("login succeeds");
    let second = bridge
        .login(&alice(), Some(&first.session_id))
        .await
        .expect("login succeeds");

    assert_ne!(first.session_id, second.session_id);
    assert!(
        bridge
            .get_token(&first.session_id)
            .await
            .expect("no error")
            .is_none()
    );
}
