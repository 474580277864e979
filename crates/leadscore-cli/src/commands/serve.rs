// Start the HTTP API

use std::sync::Arc;

use async_trait::async_trait;
use leadscore_api::{ApiServer, AppState};
use leadscore_config::AppConfig;

use super::Command;
use crate::{
    bootstrap::{build_pipeline, open_store},
    error::CliResult,
};

pub struct ServeCommand {
    pub config: AppConfig,
}

impl ServeCommand {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> CliResult<()> {
        let pipeline = build_pipeline(&self.config, open_store(&self.config))?;
        let state = AppState::new(Arc::new(pipeline));

        ApiServer::new(self.config.server.bind_address(), state)
            .run()
            .await?;
        Ok(())
    }
}
