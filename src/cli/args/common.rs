//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty format - colored, human-oriented
    #[default]
    Pretty,
    /// Table format - one row per attribute
    Table,
    /// JSON format - structured for scripts
    Json,
}
