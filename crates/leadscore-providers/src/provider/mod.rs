//! Provider trait

use async_trait::async_trait;

use crate::{
    error::ProviderError,
    models::{ChatRequest, ChatResponse, ModelInfo},
};

/// Core trait that all providers must implement
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider's unique identifier
    fn id(&self) -> &str;

    /// Get the provider's human-readable name
    fn name(&self) -> &str;

    /// Get the list of available models
    fn models(&self) -> Vec<ModelInfo>;

    /// Send a chat completion request
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}
