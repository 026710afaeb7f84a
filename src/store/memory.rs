//! In-memory score store.

use super::{ScoreRecord, ScoreStore};
use crate::errors::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::trace;

/// Thread-safe map of receipt id to score record, guarded by an async `RwLock`.
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    records: Arc<RwLock<HashMap<String, ScoreRecord>>>,
}

impl MemoryScoreStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ScoreStore for MemoryScoreStore {
    async fn put(&self, record: ScoreRecord) -> Result<()> {
        let mut records = self.records.write().await;
        trace!("Storing {} points under {}", record.points, record.id);
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<ScoreRecord>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.records.read().await.len())
    }
}
