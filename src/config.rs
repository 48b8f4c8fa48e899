use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Process-wide configuration, loaded once at startup and immutable after.
///
/// The API key comes from the `YOUTUBE_API_KEY` environment variable, with
/// the config file as fallback. Only the API-search path needs it; scrape
/// and transcript probing are unauthenticated.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub default_channel: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytscan/config.toml (if present), then
    /// overlay the YOUTUBE_API_KEY environment variable.
    pub fn load() -> Result<Self> {
        let mut config = Self::from_file()?;
        if let Ok(key) = std::env::var("YOUTUBE_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        Ok(config)
    }

    fn from_file() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// Fail fast when a command needs the Data API credential.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            eyre::eyre!(
                "YOUTUBE_API_KEY not set (required for the API-search path; \
                 set the environment variable or api_key in {})",
                config_path().display()
            )
        })
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytscan")
        .join("config.toml")
}
