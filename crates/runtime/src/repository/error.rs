//! Error types raised by store implementations.

use thiserror::Error;

/// Errors surfaced by match store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("match store lock was poisoned")]
    LockPoisoned,

    #[error("no user data directory available on this platform")]
    NoDataDir,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
