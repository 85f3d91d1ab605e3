//! Command execution context
//!
//! Loads configuration, validates credentials and builds the provider
//! configuration that every resource operation receives.

use std::sync::Arc;

use clap::ValueEnum;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::DatadogClient;
use crate::config::Config;
use crate::error::Result;
use crate::provider::sds_group::RESOURCE_TYPE;
use crate::provider::{ProviderConfiguration, SensitiveDataScannerGroupResource};
use crate::state::StateStore;

/// Context for command execution: API handle, state and output format
pub struct CommandContext {
    pub meta: ProviderConfiguration,
    pub resource: SensitiveDataScannerGroupResource,
    pub state: StateStore,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a fully initialized context.
    ///
    /// # Errors
    /// Returns an error if the config file is unreadable or either key is
    /// missing after flags and environment are applied.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = load_config(opts)?;
        config.validate_auth()?;

        let client = DatadogClient::with_host(
            config.api_key.clone().unwrap_or_default(),
            config.app_key.clone().unwrap_or_default(),
            Some(config.api_url().to_string()),
            config.timeout(),
        )?;
        log::debug!("Using Datadog API at {}", client.base_url());

        Ok(Self {
            format: resolve_format(opts, &config),
            meta: ProviderConfiguration::new(Arc::new(client)),
            resource: SensitiveDataScannerGroupResource::new(),
            state: state_store(opts),
        })
    }
}

/// Load the config file (if any) with flag/environment overrides applied
pub fn load_config(opts: &GlobalOptions) -> Result<Config> {
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.apply_overrides(&opts.overrides());
    Ok(config)
}

/// Output format: flag or environment, then config preference, then default
pub fn resolve_format(opts: &GlobalOptions, config: &Config) -> OutputFormat {
    if let Some(format) = opts.format {
        return format;
    }

    match config.preferences.format.as_deref() {
        Some(pref) => OutputFormat::from_str(pref, true).unwrap_or_else(|_| {
            log::warn!("Ignoring unknown output format preference '{}'", pref);
            OutputFormat::default()
        }),
        None => OutputFormat::default(),
    }
}

pub fn state_store(opts: &GlobalOptions) -> StateStore {
    StateStore::new(&opts.state, RESOURCE_TYPE)
}
