mod config;
mod error;
mod handlers;
mod middleware;
mod router;
mod session;


use std::sync::Arc;

pub use config::BRIDGE_REDIRECT_ANON;
pub use error::IntoResponseError;
pub use middleware::route_guard;
pub use router::{sanctum_bridge_router, sanctum_bridge_router_no_trace};
pub use session::{AuthRedirect, AuthSession};

// Re-export the pieces of sanctum_bridge an application needs to wire things up
pub use sanctum_bridge::{AuthBridge, BRIDGE_ROUTE_PREFIX, RouteGuard, Session, Token};

/// Shared state handed to the router, the middleware and the extractor
pub type BridgeState = Arc<AuthBridge>;
