use super::receipt::{ReceiptId, ScoreRecord};
use crate::error::Result;
use async_trait::async_trait;

/// Storage for scored receipts.
///
/// Records are written once and never updated or removed.
#[async_trait]
pub trait ReceiptStore: Send + Sync {
    /// Stores a record under a freshly generated identifier and returns it.
    async fn put(&self, record: ScoreRecord) -> Result<ReceiptId>;
    async fn get(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>>;
}

pub type ReceiptStoreBox = Box<dyn ReceiptStore>;
