//! Error types for the scoring crate

use leadscore_storage::{Slot, StoreError};
use thiserror::Error;

/// Batch-fatal failures of a scoring run
#[derive(Debug, Error)]
pub enum PipelineError {
    /// An input artifact has not been provided yet
    #[error("No {slot} has been provided yet")]
    PreconditionNotMet { slot: Slot },

    #[error("Storage error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for PipelineError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { slot } => PipelineError::PreconditionNotMet { slot },
            other => PipelineError::Store(other),
        }
    }
}

/// Errors while reading leads from CSV
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Errors while rendering results as CSV
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}
