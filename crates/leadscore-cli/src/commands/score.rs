// Run the scoring pipeline over stored inputs

use async_trait::async_trait;
use leadscore_config::AppConfig;

use super::Command;
use crate::{
    bootstrap::{build_pipeline, open_store},
    error::CliResult,
    output,
};

pub struct ScoreCommand {
    pub config: AppConfig,
}

impl ScoreCommand {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for ScoreCommand {
    async fn execute(&self) -> CliResult<()> {
        let pipeline = build_pipeline(&self.config, open_store(&self.config))?;
        let summary = pipeline.run_stored().await?;

        output::print_success("Scoring complete. Results are ready.");
        output::print_info(&format!(
            "Scored {} leads ({} fallback) in {:.1}s",
            summary.scored,
            summary.fallbacks,
            summary.elapsed.as_secs_f64()
        ));
        Ok(())
    }
}
