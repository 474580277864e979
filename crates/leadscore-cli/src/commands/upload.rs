// Ingest leads from a CSV file

use std::path::PathBuf;

use async_trait::async_trait;
use leadscore_config::AppConfig;
use leadscore_scoring::parse_leads;
use leadscore_storage::ArtifactStore;

use super::Command;
use crate::{bootstrap::open_store, error::CliResult, output};

pub struct UploadCommand {
    pub path: PathBuf,
    pub config: AppConfig,
}

impl UploadCommand {
    pub fn new(path: PathBuf, config: AppConfig) -> Self {
        Self { path, config }
    }
}

#[async_trait]
impl Command for UploadCommand {
    async fn execute(&self) -> CliResult<()> {
        let bytes = tokio::fs::read(&self.path).await?;
        let leads = parse_leads(bytes.as_slice())?;

        open_store(&self.config).put_leads(&leads).await?;
        output::print_success(&format!("{} leads uploaded successfully.", leads.len()));
        Ok(())
    }
}
