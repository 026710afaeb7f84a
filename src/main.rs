use dotenvy::dotenv;
use receipt_processor::{
    api::AppState,
    config,
    errors::Result,
    server,
    store::MemoryScoreStore,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also be set externally
    dotenv().ok();

    // 3. Resolve listener settings
    let server_config = config::load_server_config()
        .inspect_err(|e| error!("Failed to load server configuration: {}", e))?;
    info!(
        "Using server configuration: {}:{} (cors: {})",
        server_config.host, server_config.port, server_config.enable_cors
    );

    // 4. Scores live in memory for the lifetime of the process
    let state = AppState::new(Arc::new(MemoryScoreStore::new()));

    // 5. Serve
    server::run_server(&server_config, state)
        .await
        .inspect_err(|e| error!("Server error: {}", e))
}
