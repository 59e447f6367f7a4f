//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Dossier using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Dossier - Meeting Export Pipeline
#[derive(Parser, Debug)]
#[command(name = "dossier")]
#[command(version, about, long_about = None)]
#[command(author = "Dossier Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "dossier.toml", env = "DOSSIER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "DOSSIER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export one or more meetings to a document format
    Export(commands::export::ExportArgs),

    /// List the supported export formats
    Formats(commands::formats::FormatsArgs),

    /// List the export templates
    Templates(commands::templates::TemplatesArgs),

    /// Show recent export history
    History(commands::history::HistoryArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["dossier", "export", "m-1"]);
        assert_eq!(cli.config, "dossier.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["dossier", "--config", "custom.toml", "formats"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["dossier", "--log-level", "debug", "templates"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_options() {
        let cli = Cli::parse_from([
            "dossier", "export", "m-1", "m-2", "--format", "md", "--no-transcript",
        ]);
        let Commands::Export(args) = cli.command else {
            panic!("expected export command");
        };
        assert_eq!(args.meeting_ids, vec!["m-1", "m-2"]);
        assert_eq!(args.format.as_deref(), Some("md"));
        assert!(args.no_transcript);
    }

    #[test]
    fn test_cli_parse_history() {
        let cli = Cli::parse_from(["dossier", "history", "--limit", "5"]);
        let Commands::History(args) = cli.command else {
            panic!("expected history command");
        };
        assert_eq!(args.limit, 5);
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["dossier", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["dossier", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
