//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};
use crate::config::ConfigOverrides;

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the flag/env layer; config file values are merged in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format; `None` defers to the config file preference
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.sdsgroup/config.yaml)
    pub config: Option<String>,

    /// State file path
    pub state: String,

    /// Datadog API base URL
    pub api_url: Option<String>,

    pub api_key: Option<String>,

    pub app_key: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            state: cli.state.clone(),
            api_url: cli.api_url.clone(),
            api_key: cli.api_key.clone(),
            app_key: cli.app_key.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Flag/environment values that override the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_key: self.api_key.clone(),
            app_key: self.app_key.clone(),
            api_url: self.api_url.clone(),
        }
    }
}
