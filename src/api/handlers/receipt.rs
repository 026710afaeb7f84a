use crate::{
    api::{
        AppState,
        dto::{PointsResponse, ProcessReceiptResponse},
        json::ApiJson,
    },
    core::{receipt::RawReceipt, receipts},
    errors::Result,
};
use axum::{
    Json,
    extract::{Path, State},
};

/// `POST /receipts/process`
pub async fn process_receipt(
    State(state): State<AppState>,
    ApiJson(raw): ApiJson<RawReceipt>,
) -> Result<Json<ProcessReceiptResponse>> {
    let id = receipts::process_receipt(state.store.as_ref(), &raw).await?;
    Ok(Json(ProcessReceiptResponse { id }))
}

/// `GET /receipts/:id/points`
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    let points = receipts::get_points(state.store.as_ref(), &id).await?;
    Ok(Json(PointsResponse { points }))
}
