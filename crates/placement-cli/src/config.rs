use std::path::{Path, PathBuf};
use std::time::Duration;

use placement_network::DEFAULT_API_BASE;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Args;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// On-disk shape; every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_base: Option<String>,
    request_timeout_ms: Option<u64>,
    color: Option<bool>,
    confetti_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    /// `None` keeps the HTTP client's own default.
    pub request_timeout: Option<Duration>,
    pub color: bool,
    /// Zero disables the animation.
    pub confetti: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: None,
            color: true,
            confetti: Duration::from_millis(1500),
        }
    }
}

impl Config {
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        let file: FileConfig = toml::from_str(text)?;
        let defaults = Self::default();
        Ok(Self {
            api_base: file.api_base.unwrap_or(defaults.api_base),
            request_timeout: file.request_timeout_ms.map(Duration::from_millis),
            color: file.color.unwrap_or(defaults.color),
            confetti: file.confetti_ms.map_or(defaults.confetti, Duration::from_millis),
        })
    }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Command line and environment win over the file.
    pub fn with_overrides(mut self, args: &Args) -> Self {
        if let Some(api_base) = &args.api_base {
            self.api_base = api_base.clone();
        }
        if args.no_color {
            self.color = false;
        }
        self
    }
}
