//! Corpagent CLI - heuristic compliance review for corporate documents.

use clap::Parser;
use corpagent_cli::commands;
use corpagent_cli::config::OutputFormat;
use corpagent_cli::{Cli, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr so stdout stays clean for JSON)
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let color_enabled = !cli.no_color;
    if let Err(e) = commands::run(cli) {
        let formatter = Formatter::new(OutputFormat::Text, color_enabled);
        eprintln!("{}", formatter.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }
}
