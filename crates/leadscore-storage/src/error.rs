//! Storage error types

use thiserror::Error;

use crate::slot::Slot;

/// Errors raised by artifact stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Nothing stored in slot '{slot}'")]
    NotFound { slot: Slot },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
