//! Application state for the API server

use std::sync::Arc;

use leadscore_scoring::ScoringPipeline;
use leadscore_storage::ArtifactStore;

/// Application state shared across all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Scoring pipeline; serializes runs issued through this server
    pub pipeline: Arc<ScoringPipeline>,
    /// Artifact store shared with the pipeline
    pub store: Arc<dyn ArtifactStore>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(pipeline: Arc<ScoringPipeline>) -> Self {
        let store = pipeline.store().clone();
        Self {
            pipeline,
            store,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
