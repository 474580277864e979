//! Error types for the providers module

use thiserror::Error;

/// Errors that can occur when interacting with providers
#[derive(Debug, Error, PartialEq, Clone)]
pub enum ProviderError {
    /// Authentication failed (never includes key details)
    #[error("Authentication failed")]
    AuthError,

    /// Rate limited by provider
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Upstream reported 503 Service Unavailable
    #[error("Service unavailable (503): {0}")]
    Overloaded(String),

    /// Non-success HTTP status not covered by a more specific variant
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Network error occurred
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Generic provider error
    #[error("Provider error: {0}")]
    ProviderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid model specified
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl ProviderError {
    /// Map a non-success HTTP status and body to an error
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => ProviderError::AuthError,
            429 => ProviderError::RateLimited(60),
            503 => ProviderError::Overloaded(body),
            _ => ProviderError::Http {
                status,
                message: body,
            },
        }
    }

    /// True when the upstream signalled a retriable overload
    pub fn is_overloaded(&self) -> bool {
        matches!(self, ProviderError::Overloaded(_))
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::ProviderError("Request timeout".to_string())
        } else if err.is_connect() {
            ProviderError::NetworkError(err.to_string())
        } else if err.is_decode() {
            ProviderError::SerializationError(err.to_string())
        } else {
            ProviderError::ProviderError(err.to_string())
        }
    }
}
