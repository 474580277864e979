// Print stored results

use async_trait::async_trait;
use leadscore_config::AppConfig;
use leadscore_domain::ResultSet;
use leadscore_storage::{ArtifactStore, StoreError};

use super::Command;
use crate::{
    bootstrap::open_store,
    error::{CliError, CliResult},
};

const NO_RESULTS: &str = "Results not found. Run the scoring process first.";

/// Stored results, or `NoResults` when no run has completed
pub async fn load_results(store: &dyn ArtifactStore) -> CliResult<ResultSet> {
    store.get_results().await.map_err(|e| match e {
        StoreError::NotFound { .. } => CliError::NoResults(NO_RESULTS.to_string()),
        other => other.into(),
    })
}

pub struct ResultsCommand {
    pub config: AppConfig,
}

impl ResultsCommand {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for ResultsCommand {
    async fn execute(&self) -> CliResult<()> {
        let store = open_store(&self.config);
        let results = load_results(store.as_ref()).await?;
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| CliError::Internal(e.to_string()))?;
        println!("{}", json);
        Ok(())
    }
}
