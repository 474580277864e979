// Save an offer from a JSON file

use std::path::PathBuf;

use async_trait::async_trait;
use leadscore_config::AppConfig;
use leadscore_domain::Offer;
use leadscore_storage::ArtifactStore;

use super::Command;
use crate::{
    bootstrap::open_store,
    error::{CliError, CliResult},
    output,
};

pub struct OfferCommand {
    pub path: PathBuf,
    pub config: AppConfig,
}

impl OfferCommand {
    pub fn new(path: PathBuf, config: AppConfig) -> Self {
        Self { path, config }
    }

    async fn read_offer(&self) -> CliResult<Offer> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let offer: Offer =
            serde_json::from_str(&content).map_err(|e| CliError::InvalidArgument {
                message: format!("{} is not a valid offer: {}", self.path.display(), e),
            })?;
        offer.validate().map_err(|e| CliError::InvalidArgument {
            message: e.to_string(),
        })?;
        Ok(offer)
    }
}

#[async_trait]
impl Command for OfferCommand {
    async fn execute(&self) -> CliResult<()> {
        let offer = self.read_offer().await?;
        open_store(&self.config).put_offer(&offer).await?;
        output::print_success("Offer details saved.");
        Ok(())
    }
}
