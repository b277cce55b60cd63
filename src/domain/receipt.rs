use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single line item on a receipt.
///
/// The price is kept as the submitted string; the scoring rules parse it on
/// demand so that a malformed price only affects the rule that needs it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// A submitted purchase receipt. Immutable once accepted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Name of the retailer or store.
    pub retailer: String,
    /// Calendar date of the purchase, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// 24-hour clock time of the purchase, `HH:MM`.
    pub purchase_time: String,
    pub items: Vec<Item>,
    /// Amount paid, as a decimal string.
    pub total: String,
}

/// Opaque identifier handed out when a receipt is accepted.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh random (v4) identifier in canonical hyphenated form.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ReceiptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What the store keeps per identifier: the receipt and its precomputed score.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ScoreRecord {
    pub receipt: Receipt,
    pub points: u64,
}
