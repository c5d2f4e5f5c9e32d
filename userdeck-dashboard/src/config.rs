use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use userdeck_model::DEFAULT_PAGE_SIZE;

use crate::infrastructure::DEFAULT_BASE_URL;

pub const API_URL_ENV: &str = "USERDECK_API_URL";
pub const PAGE_SIZE_ENV: &str = "USERDECK_PAGE_SIZE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid API base URL '{value}'")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("API base URL must use http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("invalid page size '{0}'")]
    InvalidPageSize(String),
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// `<config_dir>/userdeck/config.json`, when the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("userdeck").join("config.json"))
    }

    /// Defaults, then the config file, then `.env` and the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_file_loaded = dotenvy::dotenv().map(|_| true).or_else(|err| match err {
            dotenvy::Error::Io(_) => Ok(false),
            _ => Err(err),
        })?;
        debug!("env file loaded: {}", env_file_loaded);

        let path = path.map(Path::to_path_buf).or_else(Self::default_path);
        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())
    }

    /// Read a JSON config file. A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config file at {}", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment values looked up through `lookup`.
    pub fn apply_env(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self = self.with_api_url(url)?;
        }

        if let Some(raw) = lookup(PAGE_SIZE_ENV).filter(|v| !v.trim().is_empty()) {
            self.page_size = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(ConfigError::InvalidPageSize(raw))?;
        }

        Ok(self)
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        self.api_base_url = url.into();
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.api_base_url).map_err(|source| {
            ConfigError::InvalidUrl {
                value: self.api_base_url.clone(),
                source,
            }
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(self.api_base_url.clone()));
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize(self.page_size.to_string()));
        }
        Ok(())
    }
}
