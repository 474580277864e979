// Command handlers for the leadscore CLI

pub mod export;
pub mod offer;
pub mod results;
pub mod score;
pub mod serve;
pub mod upload;

pub use export::ExportCommand;
pub use offer::OfferCommand;
pub use results::ResultsCommand;
pub use score::ScoreCommand;
pub use serve::ServeCommand;
pub use upload::UploadCommand;

use crate::error::CliResult;

/// Trait for command handlers
#[async_trait::async_trait]
pub trait Command: Send + Sync {
    /// Execute the command
    async fn execute(&self) -> CliResult<()>;
}
