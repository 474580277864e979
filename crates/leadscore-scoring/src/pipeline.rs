//! Scoring run orchestration

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use leadscore_domain::{Lead, Offer, ResultSet};
use leadscore_storage::ArtifactStore;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{classifier::IntentClassifier, compose::compose, error::PipelineError, rules};

/// Outcome of a stored scoring run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Leads scored, equal to the number of input leads
    pub scored: usize,
    /// Leads that received the fallback insight
    pub fallbacks: usize,
    pub elapsed: Duration,
}

/// Sequences rule scoring and intent classification over a batch of leads
pub struct ScoringPipeline {
    classifier: Arc<dyn IntentClassifier>,
    store: Arc<dyn ArtifactStore>,
    run_lock: Mutex<()>,
}

impl ScoringPipeline {
    pub fn new(classifier: Arc<dyn IntentClassifier>, store: Arc<dyn ArtifactStore>) -> Self {
        Self {
            classifier,
            store,
            run_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &Arc<dyn ArtifactStore> {
        &self.store
    }

    /// Score every lead in input order
    ///
    /// Always yields exactly one record per lead.
    pub async fn run(&self, offer: &Offer, leads: &[Lead]) -> ResultSet {
        self.score_batch(offer, leads).await.0
    }

    /// Load offer and leads from the store, score them and replace the stored results
    ///
    /// Runs through the same pipeline are serialized. Nothing is written
    /// unless the whole batch was scored.
    pub async fn run_stored(&self) -> Result<RunSummary, PipelineError> {
        let _guard = self.run_lock.lock().await;
        let started = Instant::now();

        let offer = self.store.get_offer().await?;
        let leads = self.store.get_leads().await?;

        info!(
            "Starting scoring run for offer '{}' with {} leads",
            offer.name,
            leads.len()
        );

        let (results, fallbacks) = self.score_batch(&offer, &leads).await;
        self.store.put_results(&results).await?;

        let summary = RunSummary {
            scored: results.len(),
            fallbacks,
            elapsed: started.elapsed(),
        };
        info!(
            "Scoring run complete: {} scored, {} fallbacks in {:?}",
            summary.scored, summary.fallbacks, summary.elapsed
        );
        Ok(summary)
    }

    async fn score_batch(&self, offer: &Offer, leads: &[Lead]) -> (ResultSet, usize) {
        let mut results = Vec::with_capacity(leads.len());
        let mut fallbacks = 0;

        for (index, lead) in leads.iter().enumerate() {
            let rule_score = rules::score(lead, offer);
            let classification = self.classifier.classify(offer, lead).await;
            if classification.is_fallback() {
                fallbacks += 1;
            }

            let scored = compose(lead, rule_score, classification.into_insight());
            debug!(
                "Lead {}/{} '{}': rule score {}, intent {}, total {}",
                index + 1,
                leads.len(),
                scored.name,
                rule_score,
                scored.intent,
                scored.score
            );
            results.push(scored);
        }

        (results, fallbacks)
    }
}
