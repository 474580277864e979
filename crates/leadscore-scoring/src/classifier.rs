//! Intent classification with bounded retry and a fixed fallback

use async_trait::async_trait;
use leadscore_domain::{ClassifierInsight, Lead, Offer};
use leadscore_providers::{ChatRequest, FinishReason, Message, Provider, ProviderError};
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::{
    prompt::{build_prompt, parse_insight, ParseFailure},
    retry::RetryPolicy,
};

/// Outcome of classifying one lead
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Insight parsed from an upstream answer
    Classified(ClassifierInsight),
    /// No usable answer was obtained; carries [`ClassifierInsight::fallback`]
    Fallback(ClassifierInsight),
}

impl Classification {
    pub fn fallback() -> Self {
        Classification::Fallback(ClassifierInsight::fallback())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Classification::Fallback(_))
    }

    pub fn insight(&self) -> &ClassifierInsight {
        match self {
            Classification::Classified(insight) | Classification::Fallback(insight) => insight,
        }
    }

    pub fn into_insight(self) -> ClassifierInsight {
        match self {
            Classification::Classified(insight) | Classification::Fallback(insight) => insight,
        }
    }
}

/// Source of buying-intent insights for leads
///
/// Implementations never fail: when no insight can be obtained they return
/// [`Classification::Fallback`].
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(&self, offer: &Offer, lead: &Lead) -> Classification;
}

/// Outcome of a single failed classification attempt
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttemptFailure {
    /// Upstream reported it is temporarily unavailable
    #[error("upstream overloaded: {0}")]
    Overloaded(ProviderError),

    /// Upstream answered but the text was not a usable insight
    #[error("malformed response: {0}")]
    Malformed(ParseFailure),

    /// Any other provider failure; not worth retrying
    #[error("{0}")]
    Fatal(ProviderError),
}

impl AttemptFailure {
    pub fn is_retriable(&self) -> bool {
        !matches!(self, AttemptFailure::Fatal(_))
    }
}

impl From<ProviderError> for AttemptFailure {
    fn from(err: ProviderError) -> Self {
        if err.is_overloaded() {
            AttemptFailure::Overloaded(err)
        } else {
            AttemptFailure::Fatal(err)
        }
    }
}

impl From<ParseFailure> for AttemptFailure {
    fn from(err: ParseFailure) -> Self {
        AttemptFailure::Malformed(err)
    }
}

/// Classifier backed by an LLM provider
pub struct LlmIntentClassifier<P: Provider> {
    provider: P,
    model: String,
    temperature: Option<f32>,
    retry: RetryPolicy,
}

impl<P: Provider> LlmIntentClassifier<P> {
    pub fn new(provider: P, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: None,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    async fn attempt(&self, prompt: &str) -> Result<ClassifierInsight, AttemptFailure> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message::user(prompt)],
            temperature: self.temperature,
            max_tokens: None,
        };

        let response = self.provider.chat(request).await?;
        debug!(
            "Classifier response from {}: finish {:?}, tokens {} prompt / {} completion / {} total",
            response.model,
            response.finish_reason,
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            response.usage.total_tokens
        );
        if response.finish_reason != FinishReason::Stop {
            warn!(
                "Classifier response ended early ({:?}), it may be truncated",
                response.finish_reason
            );
        }

        Ok(parse_insight(&response.content)?)
    }
}

#[async_trait]
impl<P: Provider> IntentClassifier for LlmIntentClassifier<P> {
    async fn classify(&self, offer: &Offer, lead: &Lead) -> Classification {
        let prompt = build_prompt(offer, lead);
        let max_attempts = self.retry.max_attempts;

        for attempt in 1..=max_attempts {
            match self.attempt(&prompt).await {
                Ok(insight) => {
                    if attempt > 1 {
                        debug!("Classified lead '{}' after {} attempts", lead.name, attempt);
                    }
                    return Classification::Classified(insight);
                }
                Err(failure) => {
                    let retriable = failure.is_retriable();
                    warn!(
                        "Classification attempt {}/{} for lead '{}' failed (retriable: {}): {}",
                        attempt, max_attempts, lead.name, retriable, failure
                    );

                    if retriable && self.retry.has_attempts_after(attempt) {
                        debug!("Waiting {:?} before retrying", self.retry.delay);
                        tokio::time::sleep(self.retry.delay).await;
                    } else {
                        break;
                    }
                }
            }
        }

        error!(
            "Intent classification failed for lead '{}', using fallback insight",
            lead.name
        );
        Classification::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_outcome() {
        let answered = Classification::Classified(ClassifierInsight::new(
            leadscore_domain::Intent::Low,
            leadscore_domain::FALLBACK_REASONING,
        ));
        assert!(!answered.is_fallback());
        assert_eq!(answered.insight(), &ClassifierInsight::fallback());

        let fallback = Classification::fallback();
        assert!(fallback.is_fallback());
        assert_eq!(fallback.into_insight(), ClassifierInsight::fallback());
    }

    #[test]
    fn test_failure_classes() {
        let overloaded = AttemptFailure::from(ProviderError::Overloaded("busy".into()));
        assert!(matches!(overloaded, AttemptFailure::Overloaded(_)));
        assert!(overloaded.is_retriable());

        let malformed = AttemptFailure::from(ParseFailure::Empty);
        assert!(malformed.is_retriable());

        let fatal = AttemptFailure::from(ProviderError::AuthError);
        assert!(matches!(fatal, AttemptFailure::Fatal(_)));
        assert!(!fatal.is_retriable());

        let rate_limited = AttemptFailure::from(ProviderError::RateLimited(60));
        assert!(!rate_limited.is_retriable());
    }
}
