/// Registration validation and forwarding
use crate::common::{MockBackend, MockBackendConfig, backend_client, unreachable_base_url};
use http::StatusCode;
use sanctum_bridge::{
    AuthBridge, BridgeError, InMemoryTokenStore, RegistrationError, RegistrationForm, RouteGuard,
    SessionConfig,
};
use serde_json::json;
use std::sync::Arc;

fn bridge(base_url: &str) -> AuthBridge {
    AuthBridge::new(
        backend_client(base_url),
        Arc::new(InMemoryTokenStore::new()),
        SessionConfig::new("sid", 600),
        RouteGuard::new(["/dashboard"]),
    )
}

fn form(password: &str, c_password: &str) -> RegistrationForm {
    RegistrationForm {
        name: "Alice Liddell".to_string(),
        email: "alice@example.com".to_string(),
        password: password.to_string(),
        c_password: c_password.to_string(),
    }
}

#[tokio::test]
async fn test_valid_registration_is_forwarded_without_confirmation() {
    let backend = MockBackend::start(MockBackendConfig::default()).await;

    let status = bridge(&backend.base_url)
        .register(&form("abc12345!", "abc12345!"))
        .await
        .expect("registration forwarded");

    assert_eq!(status, StatusCode::CREATED);
    let recorded = backend
        .requests_to("/api/register")
        .pop()
        .expect("register request recorded");
    assert_eq!(
        recorded.body,
        Some(json!({
            "name": "Alice Liddell",
            "email": "alice@example.com",
            "password": "abc12345!"
        }))
    );
}

#[tokio::test]
async fn test_backend_status_is_passed_through() {
    let config = MockBackendConfig {
        register_status: StatusCode::UNPROCESSABLE_ENTITY,
        ..MockBackendConfig::default()
    };
    let backend = MockBackend::start(config).await;

    let status = bridge(&backend.base_url)
        .register(&form("abc12345!", "abc12345!"))
        .await
        .expect("forwarding itself succeeded");

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_invalid_registration_is_never_sent() {
    let backend = MockBackend::start(MockBackendConfig::default()).await;

    let result = bridge(&backend.base_url)
        .register(&form("abc12345!", "abc12345?"))
        .await;

    match result {
        Err(BridgeError::Validation(errors)) => {
            assert_eq!(errors.get("cPassword"), Some("Passwords do not match"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let result = bridge(&unreachable_base_url().await)
        .register(&form("abc12345!", "abc12345!"))
        .await;

    assert!(matches!(
        result,
        Err(BridgeError::Registration(RegistrationError::Transport(_)))
    ));
}
