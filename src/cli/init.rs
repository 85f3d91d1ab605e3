//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::datadog::DEFAULT_API_URL;
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for both Datadog keys and the API site, then writes the config
/// file. Keys are not verified here; `sdsgroup read` or `import` will report
/// an authentication failure.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to sdsgroup!".bold().green());
    println!("Let's set up your Datadog credentials.\n");

    let theme = ColorfulTheme::default();
    let mut config = Config::load_or_default(opts.config_ref())?;

    let api_key: String = Password::with_theme(&theme)
        .with_prompt("Datadog API key")
        .interact()?;

    let app_key: String = Password::with_theme(&theme)
        .with_prompt("Datadog application key")
        .interact()?;

    let default_url = opts
        .api_url
        .clone()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let api_url: String = Input::with_theme(&theme)
        .with_prompt("Datadog API URL")
        .default(default_url)
        .interact_text()?;

    config.api_key = Some(api_key);
    config.app_key = Some(app_key);
    config.api_url = (api_url != DEFAULT_API_URL).then_some(api_url);
    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "sdsgroup status".cyan());
    println!("  {} - Show the group schema", "sdsgroup schema".cyan());
    println!(
        "  {} - Start managing an existing group",
        "sdsgroup import <ID>".cyan()
    );

    Ok(())
}
