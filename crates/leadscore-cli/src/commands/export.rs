// Export stored results as CSV

use std::path::PathBuf;

use async_trait::async_trait;
use leadscore_config::AppConfig;
use leadscore_scoring::export_csv;

use super::{results::load_results, Command};
use crate::{bootstrap::open_store, error::CliResult, output};

pub struct ExportCommand {
    /// Destination file; stdout when absent
    pub output: Option<PathBuf>,
    pub config: AppConfig,
}

impl ExportCommand {
    pub fn new(output: Option<PathBuf>, config: AppConfig) -> Self {
        Self { output, config }
    }
}

#[async_trait]
impl Command for ExportCommand {
    async fn execute(&self) -> CliResult<()> {
        let store = open_store(&self.config);
        let csv = export_csv(&load_results(store.as_ref()).await?)?;

        match &self.output {
            Some(path) => {
                tokio::fs::write(path, csv).await?;
                output::print_success(&format!("Results exported to {}", path.display()));
            }
            None => print!("{}", csv),
        }
        Ok(())
    }
}
