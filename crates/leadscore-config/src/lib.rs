//! Lead scoring configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `LEADSCORE_*` environment variables.

pub mod error;
pub mod manager;
pub mod types;

pub use error::{ConfigError, Result};
pub use manager::ConfigManager;
pub use types::{AppConfig, ClassifierConfig, LoggingConfig, ServerConfig, StorageConfig};
