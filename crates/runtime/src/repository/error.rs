//! Error types raised by record stores.

use thiserror::Error;

/// Errors surfaced by [`super::RecordStore`] implementations and the JSON
/// collection codec.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
