//! Configuration manager implementation

use std::{collections::HashMap, path::PathBuf};

use config::{Config, Environment, File};
use tracing::debug;

use crate::{
    error::{ConfigError, Result},
    types::AppConfig,
};

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "leadscore.toml";

const ENV_PREFIX: &str = "LEADSCORE";

/// Configuration manager
pub struct ConfigManager {
    /// Configuration file path
    config_path: PathBuf,
    /// Whether a missing file is an error
    required: bool,
    /// Environment snapshot; the process environment when `None`
    env: Option<HashMap<String, String>>,
}

impl ConfigManager {
    /// Create a manager reading the optional `leadscore.toml`
    pub fn new() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            required: false,
            env: None,
        }
    }

    /// Create with an explicit config path, which must exist
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            config_path: path,
            required: true,
            env: None,
        }
    }

    /// Read environment variables from `env` instead of the process
    pub fn with_env(mut self, env: HashMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    /// Load and validate configuration
    pub fn load(&self) -> Result<AppConfig> {
        if self.required && !self.config_path.exists() {
            return Err(ConfigError::NotFound(
                self.config_path.display().to_string(),
            ));
        }

        let env = self
            .env
            .clone()
            .unwrap_or_else(|| std::env::vars().collect());

        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(env.clone().into_iter().collect())),
            );

        let mut app_config: AppConfig = builder.build()?.try_deserialize()?;
        Self::apply_legacy_env(&mut app_config, &env)?;
        Self::validate(&app_config)?;

        debug!("Loaded configuration: {:?}", app_config);
        Ok(app_config)
    }

    /// `GEMINI_API_KEY` and `PORT` apply when the prefixed variables are absent
    fn apply_legacy_env(config: &mut AppConfig, env: &HashMap<String, String>) -> Result<()> {
        if !env.contains_key("LEADSCORE_CLASSIFIER__API_KEY") {
            if let Some(key) = env.get("GEMINI_API_KEY").filter(|k| !k.is_empty()) {
                config.classifier.api_key = Some(key.clone());
            }
        }

        if !env.contains_key("LEADSCORE_SERVER__PORT") {
            if let Some(port) = env.get("PORT") {
                config.server.port = port
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Env(format!("PORT is not a valid port: {port}")))?;
            }
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<()> {
        if config.server.port == 0 {
            return Err(ConfigError::Validation(
                "Server port must be greater than 0".to_string(),
            ));
        }
        if config.storage.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "Storage data_dir cannot be empty".to_string(),
            ));
        }
        if config.classifier.provider != "google" {
            return Err(ConfigError::Validation(format!(
                "Unsupported classifier provider: {}",
                config.classifier.provider
            )));
        }
        if config.classifier.model.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Classifier model cannot be empty".to_string(),
            ));
        }
        if config.classifier.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "Classifier max_attempts must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
