use thiserror::Error;

#[derive(Error, Debug)]
pub enum CloseoutError {
    #[error("Ledger file contains no rows")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown cost category: '{0}' (expected all, coupon-fee, advertising-fee, storage-fee, disposal-fee or other-fee)")]
    UnknownCategory(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, CloseoutError>;
