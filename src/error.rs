use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("No receipt found for id {0}")]
    NotFound(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
