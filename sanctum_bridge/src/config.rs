//! Central configuration for the sanctum_bridge crate

use std::sync::LazyLock;

/// Route prefix for the bridge's HTTP endpoints
///
/// The login, logout, session and register endpoints are mounted under this prefix.
/// Default: "/auth"
pub static BRIDGE_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| parse_route_prefix(std::env::var("BRIDGE_ROUTE_PREFIX").ok()));

fn parse_route_prefix(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| "/auth".to_string())
}
