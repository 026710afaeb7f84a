use crate::core::validation::Violation;
use serde::{Deserialize, Serialize};

/// Body returned by `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReceiptResponse {
    /// Identifier to query points with
    pub id: String,
}

/// Body returned by `GET /receipts/:id/points`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsResponse {
    /// Points the receipt earned
    pub points: u64,
}

/// Body returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable status line
    pub message: String,
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` when the handler runs
    pub status: String,
    /// Crate version
    pub version: String,
    /// Number of receipts processed so far
    pub receipts_stored: usize,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Stable machine-readable code, e.g. `VALIDATION_ERROR`
    pub code: String,
    /// Broken rules, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub violations: Option<Vec<Violation>>,
}
