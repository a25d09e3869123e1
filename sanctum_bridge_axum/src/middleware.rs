use axum::{
    extract::{OriginalUri, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::BridgeState;
use super::session::AuthRedirect;

/// Route guard middleware
///
/// Lets requests to unprotected paths through untouched. Requests to a
/// protected path need a session with a stored token; the token is then
/// placed in the request extensions for the handler. Anonymous GET requests
/// are redirected to `BRIDGE_REDIRECT_ANON`, other methods get 401.
///
/// ```no_run
/// use axum::{Router, middleware::from_fn_with_state, routing::get};
/// use sanctum_bridge_axum::{BridgeState, route_guard};
///
/// fn app(state: BridgeState) -> Router {
///     Router::new()
///         .route("/dashboard", get(|| async { "dashboard" }))
///         .layer(from_fn_with_state(state.clone(), route_guard))
///         .with_state(state)
/// }
/// ```
pub async fn route_guard(
    State(bridge): State<BridgeState>,
    mut req: Request,
    next: Next,
) -> Response {
    // Nested routers strip their prefix from the request uri
    let path = req
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.path().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    match bridge.authorize(&path, req.headers()).await {
        Ok((true, token)) => {
            if let Some(token) = token {
                req.extensions_mut().insert(token);
            }
            next.run(req).await
        }
        Ok((false, _)) => {
            tracing::debug!("Anonymous request to protected path {path}");
            AuthRedirect::new(req.method().clone()).into_response()
        }
        Err(e) => {
            tracing::error!("Route guard failed for {path}: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
