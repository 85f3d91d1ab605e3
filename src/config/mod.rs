//! Configuration management for sdsgroup

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::client::datadog::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Datadog API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Datadog application key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_key: Option<String>,

    /// API base URL for sites other than US1 (e.g. `https://api.datadoghq.eu`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Values from CLI flags or the environment that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_key: Option<String>,
    pub app_key: Option<String>,
    pub api_url: Option<String>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".sdsgroup").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path (defaults to ~/.sdsgroup/config.yaml)
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Load the file if it exists, otherwise start from defaults.
    ///
    /// Credentials may come entirely from the environment, so a missing file
    /// is not an error here.
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Save configuration to an optional path (defaults to ~/.sdsgroup/config.yaml)
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Keys are secrets: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Apply flag/environment values on top of the file values
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(ref key) = overrides.api_key {
            self.api_key = Some(key.clone());
        }
        if let Some(ref key) = overrides.app_key {
            self.app_key = Some(key.clone());
        }
        if let Some(ref url) = overrides.api_url {
            self.api_url = Some(url.clone());
        }
    }

    /// Validate that required credentials are present
    pub fn validate_auth(&self) -> Result<()> {
        if self.api_key.as_deref().unwrap_or_default().is_empty() {
            return Err(ConfigError::MissingApiKey.into());
        }
        if self.app_key.as_deref().unwrap_or_default().is_empty() {
            return Err(ConfigError::MissingAppKey.into());
        }
        Ok(())
    }

    /// API base URL, falling back to the US1 site
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.preferences.timeout_secs)
    }
}
