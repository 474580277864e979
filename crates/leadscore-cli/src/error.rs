// CLI error types

use leadscore_config::ConfigError;
use leadscore_providers::ProviderError;
use leadscore_scoring::{ExportError, IngestError, PipelineError};
use leadscore_storage::StoreError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    MissingInput(String),

    #[error("{0}")]
    NoResults(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message } => {
                format!(
                    "Invalid argument: {}\n\nRun 'leadscore --help' for usage information.",
                    message
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
            CliError::Config(msg) => {
                format!(
                    "Configuration error: {}\n\nCheck leadscore.toml and LEADSCORE_* environment variables.",
                    msg
                )
            }
            CliError::Provider(msg) => {
                format!(
                    "Provider error: {}\n\nSet GEMINI_API_KEY or classifier.api_key.",
                    msg
                )
            }
            CliError::Storage(msg) => {
                format!("Storage error: {}\n\nCheck the data directory.", msg)
            }
            CliError::MissingInput(msg) => {
                format!(
                    "{}\n\nRun 'leadscore offer <FILE.json>' and 'leadscore upload <FILE.csv>' first.",
                    msg
                )
            }
            CliError::NoResults(msg) => {
                format!("{}\n\nRun 'leadscore score' to produce results.", msg)
            }
            CliError::Internal(msg) => {
                format!("Internal error: {}\n\nPlease report this issue.", msg)
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

impl From<ProviderError> for CliError {
    fn from(err: ProviderError) -> Self {
        CliError::Provider(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        CliError::Storage(err.to_string())
    }
}

impl From<PipelineError> for CliError {
    fn from(err: PipelineError) -> Self {
        match err {
            missing @ PipelineError::PreconditionNotMet { .. } => {
                CliError::MissingInput(missing.to_string())
            }
            PipelineError::Store(e) => e.into(),
        }
    }
}

impl From<IngestError> for CliError {
    fn from(err: IngestError) -> Self {
        CliError::InvalidArgument {
            message: err.to_string(),
        }
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        CliError::Internal(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
