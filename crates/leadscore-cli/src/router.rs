// Command routing and dispatch

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use leadscore_config::{AppConfig, ConfigManager};
use tracing::debug;

use crate::{
    commands::*,
    error::CliResult,
    logging,
};

/// Leadscore - score sales leads against a product offer
#[derive(Parser, Debug)]
#[command(name = "leadscore")]
#[command(bin_name = "leadscore")]
#[command(about = "Score sales leads by rules and AI-classified buying intent")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (default: ./leadscore.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding offer, leads and results
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimize output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Save the offer to score leads against
    Offer {
        /// Offer JSON file
        #[arg(value_name = "FILE.json")]
        file: PathBuf,
    },

    /// Upload leads from a CSV file
    Upload {
        /// Leads CSV file with a header row
        #[arg(value_name = "FILE.csv")]
        file: PathBuf,
    },

    /// Score the uploaded leads
    Score,

    /// Print the latest results as JSON
    Results,

    /// Export the latest results as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Command router
pub struct CommandRouter;

impl CommandRouter {
    /// Parse arguments and execute the selected command
    pub async fn route() -> CliResult<()> {
        let cli = Cli::parse();
        let config = Self::load_config(&cli)?;
        logging::init_logging(cli.verbose, cli.quiet, &config.logging.level);
        debug!("Running {:?}", cli.command);
        Self::execute(cli.command, config).await
    }

    /// Resolve configuration and apply global flag overrides
    pub fn load_config(cli: &Cli) -> CliResult<AppConfig> {
        let manager = match &cli.config {
            Some(path) => ConfigManager::with_path(path.clone()),
            None => ConfigManager::new(),
        };
        let mut config = manager.load()?;

        if let Some(data_dir) = &cli.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Commands::Serve { host, port } = &cli.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            ConfigManager::validate(&config)?;
        }
        Ok(config)
    }

    /// Execute a command with resolved configuration
    pub async fn execute(command: Commands, config: AppConfig) -> CliResult<()> {
        match command {
            Commands::Serve { .. } => ServeCommand::new(config).execute().await,
            Commands::Offer { file } => OfferCommand::new(file, config).execute().await,
            Commands::Upload { file } => UploadCommand::new(file, config).execute().await,
            Commands::Score => ScoreCommand::new(config).execute().await,
            Commands::Results => ResultsCommand::new(config).execute().await,
            Commands::Export { output } => ExportCommand::new(output, config).execute().await,
        }
    }
}
