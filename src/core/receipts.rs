//! Receipt processing workflow.
//!
//! Composes validation, scoring and storage: a document goes in, an identifier comes
//! out, and the points can later be looked up by that identifier. Framework-agnostic;
//! the HTTP layer is a thin wrapper over these two functions.

use crate::{
    core::{receipt::RawReceipt, scoring, validation},
    errors::{Error, Result},
    store::{ScoreRecord, ScoreStore},
};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// Generates a fresh receipt identifier (random UUID v4).
#[must_use]
pub fn generate_receipt_id() -> String {
    Uuid::new_v4().to_string()
}

/// Validates and scores `raw`, stores the points, and returns the new receipt id.
///
/// # Errors
/// Returns [`Error::Validation`] if the document breaks any format rule; nothing is
/// stored in that case. Store failures are propagated.
#[instrument(skip_all, fields(retailer = %raw.retailer))]
pub async fn process_receipt(store: &dyn ScoreStore, raw: &RawReceipt) -> Result<String> {
    let receipt = validation::validate_receipt(raw).map_err(|violations| {
        warn!("Rejected receipt with {} violation(s)", violations.len());
        Error::Validation { violations }
    })?;

    let breakdown = scoring::score_breakdown(&receipt);
    debug!("Score breakdown: {}", breakdown);
    let points = breakdown.total();

    let id = generate_receipt_id();
    store.put(ScoreRecord::new(id.clone(), points)).await?;

    info!("Processed receipt {} for {} points", id, points);
    Ok(id)
}

/// Looks up the points stored for receipt `id`.
///
/// # Errors
/// Returns [`Error::ReceiptNotFound`] if no receipt was processed under `id`.
#[instrument(skip(store))]
pub async fn get_points(store: &dyn ScoreStore, id: &str) -> Result<u64> {
    store
        .get(id)
        .await?
        .map(|record| record.points)
        .ok_or_else(|| Error::ReceiptNotFound { id: id.to_string() })
}
