use axum::Router;
use std::net::SocketAddr;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) fn spawn_http_server(port: u16, app: Router) -> JoinHandle<std::io::Result<()>> {
    tokio::spawn(async move {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        tracing::info!("HTTP server listening on {}", addr);
        axum_server::bind(addr)
            .serve(app.into_make_service())
            .await
    })
}

pub(crate) fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!("sanctum_bridge_axum=debug,sanctum_bridge=debug,{app_name}=debug,info").into()
        }

        #[cfg(not(debug_assertions))]
        {
            "info".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Set RUST_LOG to change verbosity, e.g. RUST_LOG=sanctum_bridge=trace");
}
