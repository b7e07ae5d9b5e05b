//! YAML configuration for the enrichment connector.
//!
//! ```yaml
//! version: "1.0"
//! base_url: "https://publicapi.cluedin.net/"
//! api_tokens: "token-a;token-b"
//! timeout_secs: 30
//! connect_timeout_secs: 10
//! ```
//!
//! `base_url` is the service root; the versioned lookup path is appended to
//! it. Every field except `version` is optional. `ENRICHMENT_URL` and
//! `ENRICHMENT_API_TOKEN` override the file when set.
//!
//! An empty token list is not a load error. The first lookup reports it as a
//! configuration error, before any request leaves the process.

use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use lookup::{lookup_endpoint, split_tokens, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ENV_BASE_URL: &str = "ENRICHMENT_URL";
pub const ENV_API_TOKEN: &str = "ENRICHMENT_API_TOKEN";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EnrichmentConfig {
    /// Configuration format version
    pub version: String,

    /// API root; the lookup path is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `,` or `;` separated API tokens, used round-robin
    #[serde(default)]
    pub api_tokens: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl EnrichmentConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: EnrichmentConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus whatever the environment sets.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Overlay `ENRICHMENT_URL` / `ENRICHMENT_API_TOKEN`. Blank values are
    /// ignored.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    pub(crate) fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(url) = set(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(tokens) = set(ENV_API_TOKEN) {
            self.api_tokens = tokens;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        lookup_endpoint(&self.base_url)
            .map_err(|e| ConfigLoadError::Validation(format!("base_url: {e}")))?;

        if self.timeout_secs == 0 {
            return Err(ConfigLoadError::Validation(
                "timeout_secs must be greater than 0".into(),
            ));
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigLoadError::Validation(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn tokens(&self) -> Vec<String> {
        split_tokens(&self.api_tokens)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            base_url: default_base_url(),
            api_tokens: String::new(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
