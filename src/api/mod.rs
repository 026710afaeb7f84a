//! HTTP interface - routes, handlers and shared request state.
//!
//! Endpoints:
//! - `GET /` - liveness message
//! - `GET /health` - version and number of stored receipts
//! - `POST /receipts/process` - score a receipt, returns its id
//! - `GET /receipts/:id/points` - points for a processed receipt

/// Request and response bodies
pub mod dto;
/// Error to HTTP response mapping
pub mod error;
/// Route handlers
pub mod handlers;
/// JSON extractor with crate-typed rejections
pub mod json;

use crate::store::ScoreStore;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Shared data available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Where processed scores are kept
    pub store: Arc<dyn ScoreStore>,
    /// Crate version reported by the health endpoint
    pub version: String,
}

impl AppState {
    /// Creates state around an injected store.
    #[must_use]
    pub fn new(store: Arc<dyn ScoreStore>) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Builds the application router without middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::general::root))
        .route("/health", get(handlers::general::health))
        .route("/receipts/process", post(handlers::receipt::process_receipt))
        .route("/receipts/:id/points", get(handlers::receipt::get_points))
        .with_state(state)
}
