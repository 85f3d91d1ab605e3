//! Status command implementation

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::state_store;
use crate::config::Config;
use crate::error::{ConfigError, Error, Result};

/// Run the status command to display configuration and state status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "sdsgroup Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let mut config = match Config::load_from(config_path.clone()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!(
                "{} Config file not found ({})",
                "○".dimmed(),
                config_path.display()
            );
            Config::default()
        }
        Err(err) => return Err(err),
    };
    config.apply_overrides(&opts.overrides());

    println!();

    if config.api_key.is_some() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Run 'sdsgroup init' or set DD_API_KEY");
    }

    if config.app_key.is_some() {
        println!("{} Application key configured", "✓".green());
    } else {
        println!("{} Application key not configured", "✗".red());
        println!("  → Run 'sdsgroup init' or set DD_APP_KEY");
    }

    println!("{} API URL: {}", "○".dimmed(), config.api_url().cyan());

    println!();

    let store = state_store(opts);
    match store.load() {
        Ok(Some(data)) if !data.id().is_empty() => {
            println!(
                "{} Managing group {} ({})",
                "✓".green(),
                data.id().bold(),
                store.path().display()
            );
        }
        Ok(_) => {
            println!(
                "{} No group managed by {}",
                "○".dimmed(),
                store.path().display()
            );
        }
        Err(err) => {
            println!("{} State file unusable: {}", "⚠".yellow(), err);
        }
    }

    println!();
    Ok(())
}
