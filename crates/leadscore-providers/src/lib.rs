//! Leadscore AI Providers - abstraction over the LLM that classifies intent
//!
//! The classifier only needs one capability from a provider: send a prompt,
//! get text back, and learn whether a failure was the upstream reporting
//! overload. Everything else about the wire format stays in here.

pub mod error;
pub mod models;
pub mod provider;
pub mod providers;

pub use error::ProviderError;
pub use models::{ChatRequest, ChatResponse, FinishReason, Message, ModelInfo, TokenUsage};
pub use provider::Provider;
pub use providers::GoogleProvider;
