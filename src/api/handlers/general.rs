//! Service-level endpoints that don't touch receipts directly.

use crate::{
    api::{
        AppState,
        dto::{HealthResponse, MessageResponse},
    },
    errors::Result,
};
use axum::{Json, extract::State};

/// Responds with a fixed message to show the service is up.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Receipt processor is up and running!".to_string(),
    })
}

/// Reports the crate version and how many receipts are stored.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        receipts_stored: state.store.len().await?,
    }))
}
