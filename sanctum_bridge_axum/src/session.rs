use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts, OptionalFromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::{TypedHeader, headers};
use http::{Method, StatusCode, request::Parts};

use super::BridgeState;
use super::config::BRIDGE_REDIRECT_ANON;
use sanctum_bridge::Session;

/// Rejection for requests without a live bridged session
///
/// GET requests are redirected to `BRIDGE_REDIRECT_ANON`, everything else gets 401.
pub struct AuthRedirect {
    method: Method,
}

impl AuthRedirect {
    pub(crate) fn new(method: Method) -> Self {
        Self { method }
    }

    fn into_response_with_method(self) -> Response {
        if self.method == Method::GET {
            tracing::debug!("Redirecting to {}", BRIDGE_REDIRECT_ANON.as_str());
            Redirect::temporary(BRIDGE_REDIRECT_ANON.as_str()).into_response()
        } else {
            tracing::debug!("Unauthorized");
            (StatusCode::UNAUTHORIZED, "Unauthorized").into_response()
        }
    }
}

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        self.into_response_with_method()
    }
}

/// The bridged session of the current request, available as an Axum extractor
///
/// Extraction reads the session cookie and looks the token up in the bridge's
/// store. Use `Option<AuthSession>` for pages that also serve anonymous visitors.
///
/// ```no_run
/// use axum::{Router, routing::get};
/// use sanctum_bridge_axum::{AuthSession, BridgeState};
///
/// async fn hello(auth: AuthSession) -> String {
///     format!("Hi {}!", auth.session.user["name"].as_str().unwrap_or("there"))
/// }
///
/// fn app(state: BridgeState) -> Router {
///     Router::new().route("/hello", get(hello)).with_state(state)
/// }
/// ```
#[derive(Clone, Debug)]
pub struct AuthSession {
    pub session_id: String,
    pub session: Session,
}

impl<S> FromRequestParts<S> for AuthSession
where
    BridgeState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let bridge = BridgeState::from_ref(state);
        let method = parts.method.clone();

        let cookies: TypedHeader<headers::Cookie> = parts.extract().await.map_err(|_| {
            tracing::debug!("No cookies on request");
            AuthRedirect::new(method.clone())
        })?;

        let cookie_name = bridge.session_config().cookie_name.as_str();
        let session_id = cookies.get(cookie_name).ok_or_else(|| {
            tracing::debug!("Session cookie {cookie_name} not found");
            AuthRedirect::new(method.clone())
        })?;

        let session = bridge
            .get_session(session_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to read session: {e}");
                AuthRedirect::new(method.clone())
            })?
            .ok_or_else(|| {
                tracing::debug!("No token stored for session");
                AuthRedirect::new(method.clone())
            })?;

        Ok(AuthSession {
            session_id: session_id.to_string(),
            session,
        })
    }
}

impl<S> OptionalFromRequestParts<S> for AuthSession
where
    BridgeState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let result: Result<Self, Self::Rejection> =
            <AuthSession as FromRequestParts<S>>::from_request_parts(parts, state).await;
        Ok(result.ok())
    }
}
