//! Configuration management for chatline

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default backend base URL
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Application configuration
///
/// Every field is optional on disk; a missing file means all defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL (including the `/api` prefix)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Seconds between scheduled polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Default output format name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_poll_interval() -> u64 {
    3
}

fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            poll_interval_secs: default_poll_interval(),
            timeout_secs: default_timeout(),
            format: None,
        }
    }
}

impl Config {
    /// Get the default config file path (~/.chatline/config.yaml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".chatline").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from the given path, or the default path.
    ///
    /// A missing file yields the default configuration.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply a base URL override (from CLI flag or environment)
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url.to_string();
        }
        self
    }

    /// Interval between scheduled polls
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    /// HTTP request timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.poll_interval_secs == 0 {
            return Err(
                ConfigError::Invalid("poll_interval_secs must be at least 1".to_string()).into(),
            );
        }
        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api_url must be an http(s) URL, got '{}'",
                self.api_url
            ))
            .into());
        }
        Ok(())
    }
}
