mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads `.env`, the YAML config file and the environment overrides.
///
/// `CONFIG_PATH` names the file explicitly; without it `config.yaml` is used
/// when present and the built-in defaults otherwise.
pub async fn load() -> Result<Config> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(Error::config(format!("Failed to read .env file: {}", e)));
        }
    }

    let config_path = env::var("CONFIG_PATH").ok();
    load_from(config_path.as_deref(), |key| env::var(key).ok()).await
}

/// Reads `path` (or the optional default file) and applies overrides from `lookup`.
pub async fn load_from<F>(path: Option<&str>, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match path {
        Some(path) => read_file(path).await?,
        None => {
            if tokio::fs::try_exists(DEFAULT_CONFIG_PATH).await? {
                read_file(DEFAULT_CONFIG_PATH).await?
            } else {
                debug!("No config file found, using defaults");
                Config::default()
            }
        }
    };

    config.apply_env(lookup)
}

async fn read_file(path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", path);

    let config_str = tokio::fs::read_to_string(path).await?;
    Config::from_yaml(&config_str)
}

impl Config {
    pub fn from_yaml(source: &str) -> Result<Self> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Applies `HOST`, `PORT` and the credential variable on top of the file values.
    /// Fails when the credential is missing or blank.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST").filter(|h| !h.trim().is_empty()) {
            self.server.host = host.trim().to_string();
        }

        if let Some(port) = lookup("PORT").filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
        }

        let api_key = lookup(&self.llm.api_key_env)
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::config(format!(
                    "{} is missing. Set it in the environment or in a .env file.",
                    self.llm.api_key_env
                ))
            })?;
        self.llm.api_key = api_key;

        Ok(self)
    }
}
