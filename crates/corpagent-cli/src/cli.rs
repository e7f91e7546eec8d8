//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Corpagent - review corporate documents for missing sections and risky wording.
#[derive(Debug, Parser)]
#[command(name = "corpagent")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "CORPAGENT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Plain text (default)
    Text,
    /// Tables
    Table,
    /// JSON format
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Review a document or a piece of text
    Check(CheckArgs),

    /// Run a review on built-in sample content with the offline model
    Selftest,

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Document to review (.docx)
    #[arg(short = 'i', long = "file")]
    pub file: Option<PathBuf>,

    /// Text to review when no document is given
    #[arg(short, long)]
    pub query: Option<String>,

    /// Number of reference citations to show
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// Reference corpus file (paragraphs separated by blank lines)
    #[arg(short, long)]
    pub references: Option<PathBuf>,

    /// Write the marked-up document here
    #[arg(long)]
    pub marked_out: Option<PathBuf>,

    /// Write the plain-text report here
    #[arg(long)]
    pub report_out: Option<PathBuf>,

    /// Write the JSON summary here
    #[arg(long)]
    pub json_out: Option<PathBuf>,

    /// Use the offline model even when credentials are configured
    #[arg(long)]
    pub mock: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_command() {
        let cli = Cli::parse_from([
            "corpagent",
            "check",
            "--file",
            "articles.docx",
            "-k",
            "5",
            "--marked-out",
            "marked.docx",
        ]);
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.file, Some(PathBuf::from("articles.docx")));
                assert_eq!(args.top_k, Some(5));
                assert_eq!(args.marked_out, Some(PathBuf::from("marked.docx")));
                assert!(args.query.is_none());
                assert!(!args.mock);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["corpagent", "check", "-q", "hello", "--format", "json", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(cli.no_color);
    }

    #[test]
    fn test_selftest_command() {
        let cli = Cli::parse_from(["corpagent", "selftest"]);
        assert!(matches!(cli.command, Command::Selftest));
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["corpagent"]).is_err());
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Json.into();
        assert!(matches!(format, crate::config::OutputFormat::Json));
    }
}
