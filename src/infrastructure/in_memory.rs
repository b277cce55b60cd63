use crate::domain::ports::ReceiptStore;
use crate::domain::receipt::{ReceiptId, ScoreRecord};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for scored receipts.
///
/// Uses `Arc<RwLock<HashMap<ReceiptId, ScoreRecord>>>` so clones share the same
/// records. Everything is lost when the process exits.
#[derive(Default, Clone)]
pub struct InMemoryReceiptStore {
    records: Arc<RwLock<HashMap<ReceiptId, ScoreRecord>>>,
}

impl InMemoryReceiptStore {
    /// Creates a new, empty in-memory receipt store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReceiptStore for InMemoryReceiptStore {
    async fn put(&self, record: ScoreRecord) -> Result<ReceiptId> {
        let mut records = self.records.write().await;
        let mut id = ReceiptId::generate();
        // v4 collisions are practically impossible, but never overwrite a record
        while records.contains_key(&id) {
            id = ReceiptId::generate();
        }
        records.insert(id.clone(), record);
        Ok(id)
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }
}
