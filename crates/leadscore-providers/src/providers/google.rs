//! Google Gemini provider implementation
//!
//! Talks to the `generateContent` endpoint of the Google AI API.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::{
    error::ProviderError,
    models::{ChatRequest, ChatResponse, FinishReason, ModelInfo, TokenUsage},
    provider::Provider,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Google Gemini provider implementation
pub struct GoogleProvider {
    api_key: String,
    client: Arc<Client>,
    base_url: String,
}

impl GoogleProvider {
    /// Create a new Google provider instance
    pub fn new(api_key: String) -> Result<Self, ProviderError> {
        Self::with_client(Arc::new(Client::new()), api_key)
    }

    /// Create a new Google provider with a custom base URL
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        Self::with_client_and_base_url(Arc::new(Client::new()), api_key, base_url)
    }

    /// Create a new Google provider with a custom HTTP client
    pub fn with_client(client: Arc<Client>, api_key: String) -> Result<Self, ProviderError> {
        Self::with_client_and_base_url(client, api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a new Google provider with a custom HTTP client and base URL
    pub fn with_client_and_base_url(
        client: Arc<Client>,
        api_key: String,
        base_url: String,
    ) -> Result<Self, ProviderError> {
        if api_key.is_empty() {
            return Err(ProviderError::ConfigError(
                "Google API key is required".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Convert Google API response to our ChatResponse
    fn convert_response(
        response: GoogleChatResponse,
        model: String,
    ) -> Result<ChatResponse, ProviderError> {
        let candidate = response
            .candidates
            .first()
            .ok_or_else(|| ProviderError::ProviderError("No candidates in response".to_string()))?;

        let content = candidate
            .content
            .as_ref()
            .map(|c| {
                c.parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ProviderError::ProviderError("No content in response".to_string()))?;

        let finish_reason = match candidate.finish_reason.as_deref() {
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("ERROR") | Some("SAFETY") => FinishReason::Error,
            _ => FinishReason::Stop,
        };

        // Usage metadata is optional in Gemini responses
        let usage = response
            .usage_metadata
            .map(|u| TokenUsage {
                prompt_tokens: u.prompt_token_count,
                completion_tokens: u.candidates_token_count,
                total_tokens: u.total_token_count,
            })
            .unwrap_or_default();

        Ok(ChatResponse {
            content,
            model,
            usage,
            finish_reason,
        })
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    fn id(&self) -> &str {
        "google"
    }

    fn name(&self) -> &str {
        "Google"
    }

    fn models(&self) -> Vec<ModelInfo> {
        [
            ("gemini-2.0-flash", "Gemini 2.0 Flash", 1_000_000),
            ("gemini-2.0-flash-lite", "Gemini 2.0 Flash-Lite", 1_000_000),
            ("gemini-2.5-flash", "Gemini 2.5 Flash", 1_000_000),
            ("gemini-2.5-flash-lite", "Gemini 2.5 Flash-Lite", 1_000_000),
            ("gemini-2.5-pro", "Gemini 2.5 Pro", 1_000_000),
            ("gemini-1.5-pro", "Gemini 1.5 Pro", 2_000_000),
            ("gemini-1.5-flash", "Gemini 1.5 Flash", 1_000_000),
        ]
        .into_iter()
        .map(|(id, name, context_window)| ModelInfo {
            id: id.to_string(),
            name: name.to_string(),
            provider: "google".to_string(),
            context_window,
        })
        .collect()
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError> {
        let model_id = &request.model;
        if !self.models().iter().any(|m| m.id == *model_id) {
            return Err(ProviderError::InvalidModel(model_id.clone()));
        }

        let google_request = GoogleChatRequest {
            contents: vec![GoogleContent {
                role: "user".to_string(),
                parts: request
                    .messages
                    .iter()
                    .map(|m| GooglePart {
                        text: m.content.clone(),
                    })
                    .collect(),
            }],
            generation_config: Some(GoogleGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            }),
        };

        debug!("Sending generateContent request to Google for model: {}", model_id);

        let url = format!("{}/{}:generateContent", self.base_url, model_id);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&google_request)
            .send()
            .await
            .map_err(|e| {
                error!("Google API request failed: {}", e);
                ProviderError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!("Google API error ({}): {}", status, error_text);
            return Err(ProviderError::from_status(status.as_u16(), error_text));
        }

        let google_response: GoogleChatResponse = response.json().await?;
        Self::convert_response(google_response, request.model)
    }
}

/// Google API request format
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleChatRequest {
    contents: Vec<GoogleContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GoogleGenerationConfig>,
}

/// Google API content format
#[derive(Debug, Serialize, Deserialize)]
struct GoogleContent {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<GooglePart>,
}

/// Google API part format
#[derive(Debug, Serialize, Deserialize)]
struct GooglePart {
    #[serde(default)]
    text: String,
}

/// Google API generation config
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GoogleGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<usize>,
}

/// Google API response format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleChatResponse {
    #[serde(default)]
    candidates: Vec<GoogleCandidate>,
    #[serde(default)]
    usage_metadata: Option<GoogleUsageMetadata>,
}

/// Google API candidate format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleCandidate {
    content: Option<GoogleContent>,
    finish_reason: Option<String>,
}

/// Google API usage metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoogleUsageMetadata {
    #[serde(default)]
    prompt_token_count: usize,
    #[serde(default)]
    candidates_token_count: usize,
    #[serde(default)]
    total_token_count: usize,
}
