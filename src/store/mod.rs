//! Score storage.
//!
//! The service talks to storage only through [`ScoreStore`], so the backing map is
//! injected rather than global. [`MemoryScoreStore`] is the only implementation; it
//! keeps records for the lifetime of the process.

pub mod memory;

pub use memory::MemoryScoreStore;

use crate::errors::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// The stored outcome of processing one receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    /// Identifier handed back to the client
    pub id: String,
    /// Points the receipt earned
    pub points: u64,
    /// When the receipt was processed
    pub processed_at: DateTime<Utc>,
}

impl ScoreRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(id: String, points: u64) -> Self {
        Self {
            id,
            points,
            processed_at: Utc::now(),
        }
    }
}

/// Mapping from receipt identifier to score record.
///
/// Implementations must serialize access so that a reader never observes a
/// partially written record.
#[async_trait]
pub trait ScoreStore: Send + Sync {
    /// Stores `record` under its id, replacing any existing record with that id.
    async fn put(&self, record: ScoreRecord) -> Result<()>;

    /// Looks up the record stored under `id`.
    async fn get(&self, id: &str) -> Result<Option<ScoreRecord>>;

    /// Number of stored records.
    async fn len(&self) -> Result<usize>;
}
