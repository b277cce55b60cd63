use crate::domain::points::PointsBreakdown;
use crate::domain::ports::ReceiptStoreBox;
use crate::domain::receipt::{Receipt, ReceiptId, ScoreRecord};
use crate::error::{ReceiptError, Result};
use tracing::debug;

/// Scores submitted receipts and serves their points.
///
/// Points are computed once, when the receipt is accepted, and stored next to
/// it, so repeated lookups always return the same value.
pub struct ReceiptProcessor {
    store: ReceiptStoreBox,
}

impl ReceiptProcessor {
    /// Creates a new `ReceiptProcessor` backed by `store`.
    pub fn new(store: ReceiptStoreBox) -> Self {
        Self { store }
    }

    /// Scores and stores a receipt, returning its new identifier.
    pub async fn process(&self, receipt: Receipt) -> Result<ReceiptId> {
        let breakdown = PointsBreakdown::for_receipt(&receipt);
        let points = breakdown.total();

        let id = self.store.put(ScoreRecord { receipt, points }).await?;
        debug!(%id, points, ?breakdown, "receipt scored");
        Ok(id)
    }

    /// Returns the points for a previously processed receipt.
    pub async fn points(&self, id: &ReceiptId) -> Result<u64> {
        self.store
            .get(id)
            .await?
            .map(|record| record.points)
            .ok_or_else(|| ReceiptError::NotFound(id.to_string()))
    }
}
