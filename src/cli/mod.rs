//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod completions;
pub mod context;
pub mod group;
pub mod init;
pub mod schema;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::state::DEFAULT_STATE_PATH;

/// sdsgroup - manage a Datadog Sensitive Data Scanner group declaratively
#[derive(Parser, Debug)]
#[command(name = "sdsgroup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SDSGROUP_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "SDSGROUP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Local state file for the managed group
    #[arg(
        long,
        global = true,
        env = "SDSGROUP_STATE",
        hide_env = true,
        default_value = DEFAULT_STATE_PATH
    )]
    pub state: String,

    /// Datadog API base URL (e.g. https://api.datadoghq.eu)
    #[arg(long, global = true, env = "DD_HOST", hide_env = true)]
    pub api_url: Option<String>,

    /// Datadog API key
    #[arg(
        long,
        global = true,
        env = "DD_API_KEY",
        hide_env_values = true,
        hide = true
    )]
    pub api_key: Option<String>,

    /// Datadog application key
    #[arg(
        long,
        global = true,
        env = "DD_APP_KEY",
        hide_env_values = true,
        hide = true
    )]
    pub app_key: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SDSGROUP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize sdsgroup configuration
    Init,

    /// Show configuration and state status
    Status,

    /// Display version information
    Version,

    /// Show the group resource schema
    Schema,

    /// Create the group described by a configuration file
    Create {
        /// Desired configuration (YAML or JSON)
        #[arg(long, short = 'f')]
        file: String,

        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Refresh the managed group from Datadog
    Read,

    /// Replace the managed group's settings with a configuration file
    Update {
        /// Desired configuration (YAML or JSON)
        #[arg(long, short = 'f')]
        file: String,

        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Delete the managed group
    Delete {
        /// Expected scanner configuration version
        #[arg(long)]
        version: Option<i64>,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,

        /// Print the request body instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Start managing an existing group by id
    Import {
        /// Group id
        id: String,
    },

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   sdsgroup completion bash > /etc/bash_completion.d/sdsgroup
  zsh:    sdsgroup completion zsh > \"${fpath[1]}/_sdsgroup\"
  fish:   sdsgroup completion fish > ~/.config/fish/completions/sdsgroup.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
