//! Application layer tying the scoring rules to storage.
//!
//! `ReceiptProcessor` is what the HTTP handlers talk to: it scores a receipt on
//! submission, hands the record to a [`crate::domain::ports::ReceiptStore`], and
//! answers points lookups by identifier.

pub mod processor;
