use thiserror::Error;

/// Errors from ledger store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed internally (lock poisoning, connection loss, ...).
    #[error("store backend error: {0}")]
    Backend(String),

    /// I/O error from a durable storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
