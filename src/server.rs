//! Server setup: middleware, listener, graceful shutdown.

use crate::{
    api::{AppState, create_router},
    config::ServerConfig,
    errors::Result,
};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, instrument};

/// Builds the router with request tracing and, if enabled, CORS.
pub fn build_app(state: AppState, config: &ServerConfig) -> Router {
    let mut router = create_router(state).layer(TraceLayer::new_for_http());

    if config.enable_cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );
    }
    router
}

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
/// Returns an error if the address is invalid, the port cannot be bound, or the
/// server stops abnormally.
#[instrument(skip_all, fields(host = %config.host, port = config.port))]
pub async fn run_server(config: &ServerConfig, state: AppState) -> Result<()> {
    let addr = config.socket_addr()?;
    let app = build_app(state, config);

    let listener = TcpListener::bind(addr).await?;
    info!("Receipt processor listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        // Without a signal handler, keep serving rather than exiting immediately.
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}
