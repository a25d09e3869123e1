use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

use sanctum_bridge::{Credentials, RegistrationForm, Session};

use super::BridgeState;
use super::error::IntoResponseError;
use super::session::AuthSession;

pub(super) fn router() -> Router<BridgeState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session))
        .route("/register", post(register))
}

/// Exchange credentials with the backend and open a bridged session
async fn login(
    State(bridge): State<BridgeState>,
    headers: HeaderMap,
    Json(credentials): Json<Credentials>,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let outcome = bridge
        .login(&credentials, bridge.session_id_from_headers(&headers))
        .await
        .into_response_error()?;

    Ok((outcome.headers, Json(outcome.session)))
}

async fn logout(
    State(bridge): State<BridgeState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, (StatusCode, Json<Value>)> {
    let headers = bridge
        .logout(bridge.session_id_from_headers(&headers))
        .await
        .into_response_error()?;
    Ok((headers, StatusCode::OK))
}

/// Current session, or 401 for anonymous callers
async fn session(
    auth: Option<AuthSession>,
) -> Result<Json<Session>, (StatusCode, Json<Value>)> {
    match auth {
        Some(auth) => Ok(Json(auth.session)),
        None => Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Unauthorized" })),
        )),
    }
}

/// Validate the form, forward it, and report success once the backend answered
async fn register(
    State(bridge): State<BridgeState>,
    Json(form): Json<RegistrationForm>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let status = bridge.register(&form).await.into_response_error()?;
    tracing::debug!("Registration forwarded, backend answered {status}");
    Ok(Json(json!({ "status": 200, "message": "success" })))
}
