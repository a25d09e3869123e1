//! Router for the bridge's HTTP endpoints

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::BridgeState;

/// Create a router for the login, logout, session and register endpoints
///
/// Mount it under `BRIDGE_ROUTE_PREFIX`:
/// - POST {BRIDGE_ROUTE_PREFIX}/login
/// - POST {BRIDGE_ROUTE_PREFIX}/logout
/// - GET {BRIDGE_ROUTE_PREFIX}/session
/// - POST {BRIDGE_ROUTE_PREFIX}/register
pub fn sanctum_bridge_router(state: BridgeState) -> Router {
    sanctum_bridge_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Same as `sanctum_bridge_router()` without the HTTP tracing layer
pub fn sanctum_bridge_router_no_trace(state: BridgeState) -> Router {
    super::handlers::router().with_state(state)
}
