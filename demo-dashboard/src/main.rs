use axum::middleware::from_fn_with_state;
use dotenvy::dotenv;
use std::sync::Arc;

use sanctum_bridge_axum::{AuthBridge, BRIDGE_ROUTE_PREFIX, route_guard, sanctum_bridge_router};

mod pages;
mod server;
use server::{init_tracing, spawn_http_server};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    init_tracing("demo_dashboard");

    let state = Arc::new(AuthBridge::from_env()?);
    tracing::info!(
        "Protecting {:?}, backend at {}",
        state.guard().protected_prefixes(),
        state.backend().config().base_url
    );

    let app = pages::router()
        .with_state(state.clone())
        .nest(BRIDGE_ROUTE_PREFIX.as_str(), sanctum_bridge_router(state.clone()))
        .layer(from_fn_with_state(state, route_guard));

    spawn_http_server(3001, app).await??;
    Ok(())
}
