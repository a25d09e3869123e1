//! Central configuration for the sanctum_bridge_axum crate

use std::sync::LazyLock;

/// Where anonymous GET requests to a protected page are redirected
/// Default: "/"
pub static BRIDGE_REDIRECT_ANON: LazyLock<String> =
    LazyLock::new(|| parse_redirect_anon(std::env::var("BRIDGE_REDIRECT_ANON").ok()));

fn parse_redirect_anon(raw: Option<String>) -> String {
    raw.unwrap_or_else(|| "/".to_string())
}
