// Wiring of stores, providers and the scoring pipeline from configuration

use std::sync::Arc;

use leadscore_config::AppConfig;
use leadscore_providers::{GoogleProvider, Provider};
use leadscore_scoring::{LlmIntentClassifier, RetryPolicy, ScoringPipeline};
use leadscore_storage::{ArtifactStore, FileStore};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// File-backed store under the configured data directory
pub fn open_store(config: &AppConfig) -> Arc<dyn ArtifactStore> {
    debug!("Using data directory {}", config.storage.data_dir.display());
    Arc::new(FileStore::new(config.storage.data_dir.clone()))
}

/// Gemini-backed classifier from the classifier settings
pub fn build_classifier(config: &AppConfig) -> CliResult<LlmIntentClassifier<GoogleProvider>> {
    let settings = &config.classifier;
    let api_key = settings.api_key.clone().unwrap_or_default();
    if api_key.is_empty() {
        return Err(CliError::Provider(
            "No Gemini API key configured".to_string(),
        ));
    }

    let provider = match &settings.base_url {
        Some(base_url) => GoogleProvider::with_base_url(api_key, base_url.clone())?,
        None => GoogleProvider::new(api_key)?,
    };

    if !provider.models().iter().any(|m| m.id == settings.model) {
        let known: Vec<String> = provider.models().into_iter().map(|m| m.id).collect();
        return Err(CliError::Config(format!(
            "Unsupported classifier model '{}' (expected one of: {})",
            settings.model,
            known.join(", ")
        )));
    }

    Ok(LlmIntentClassifier::new(provider, settings.model.clone())
        .with_temperature(settings.temperature)
        .with_retry_policy(RetryPolicy::new(
            settings.max_attempts,
            settings.retry_delay(),
        )))
}

/// Scoring pipeline over `store` using the configured classifier
pub fn build_pipeline(
    config: &AppConfig,
    store: Arc<dyn ArtifactStore>,
) -> CliResult<ScoringPipeline> {
    let classifier = build_classifier(config)?;
    Ok(ScoringPipeline::new(Arc::new(classifier), store))
}
