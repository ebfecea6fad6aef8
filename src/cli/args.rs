//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    alternatives::AlternativesArgs, completions::CompletionsArgs, config::ConfigCommands,
    cook::CookArgs, init::InitArgs, near_miss::NearMissArgs, stock::StockCommands,
};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about = "Pantry inventory and pasta recipe matcher")]
#[command(long_about = "Track ingredient quantities in plain CSV files and find the pasta dishes you can cook with what is on hand.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project root (default: auto-detect by finding .pantry/)
    #[arg(long, global = true, env = "PANTRY_PROJECT")]
    pub project: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new pantry with starter data
    Init(InitArgs),

    /// Record quantities added or used and list what is on hand
    #[command(subcommand)]
    Stock(StockCommands),

    /// Show the dishes you can prepare right now
    Cook(CookArgs),

    /// Show the dishes missing exactly one ingredient
    NearMiss(NearMissArgs),

    /// Show interchangeable pasta bases
    Alternatives(AlternativesArgs),

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Auto,
    /// Markdown
    Md,
    /// JSON format (for programming)
    Json,
    /// YAML format
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// CSV format (for spreadsheets)
    Csv,
}

impl OutputFormat {
    /// Use `fallback` (the configured default) when nothing was requested
    pub fn or_default(self, fallback: Option<&str>) -> Self {
        match (self, fallback) {
            (OutputFormat::Auto, Some(name)) => {
                OutputFormat::from_str(name, true).unwrap_or(OutputFormat::Auto)
            }
            (format, _) => format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_configured_default_format() {
        assert_eq!(OutputFormat::Auto.or_default(Some("json")), OutputFormat::Json);
        assert_eq!(OutputFormat::Auto.or_default(Some("bogus")), OutputFormat::Auto);
        assert_eq!(OutputFormat::Tsv.or_default(Some("json")), OutputFormat::Tsv);
        assert_eq!(OutputFormat::Auto.or_default(None), OutputFormat::Auto);
    }
}
