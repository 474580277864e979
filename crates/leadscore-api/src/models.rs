//! Request and response bodies

use serde::{Deserialize, Serialize};

/// Plain acknowledgement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Outcome of a scoring run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub message: String,
    /// Leads scored
    pub scored: usize,
    /// Leads that received the fallback insight
    pub fallbacks: usize,
    pub elapsed_ms: u64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Version
    pub version: String,
    /// Uptime in seconds
    pub uptime: u64,
}
