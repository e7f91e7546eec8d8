//! Command implementations.

pub mod check;
pub mod config;
pub mod selftest;

pub use self::check::execute_check;
pub use self::config::{execute_init, execute_show};
pub use self::selftest::execute_selftest;

use crate::cli::{Cli, Command, ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::Formatter;

/// Load configuration and dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        format,
        no_color,
        config: config_path,
        command,
        ..
    } = cli;

    // `config init` writes the file every other command loads
    if let Command::Config(ConfigArgs {
        action: ConfigAction::Init { force },
    }) = command
    {
        let formatter = Formatter::new(format.map(Into::into).unwrap_or(OutputFormat::Text), !no_color);
        return execute_init(config_path.as_deref(), force, &formatter);
    }

    let config = Config::load(config_path.as_deref())?;

    // Determine output format
    let format = format.map(Into::into).unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match command {
        Command::Check(args) => execute_check(args, &config, &formatter),
        Command::Selftest => execute_selftest(&config, &formatter),
        Command::Config(_) => execute_show(&config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("corpagent").chain(args.iter().copied()))
    }

    #[test]
    fn test_init_creates_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.toml");
        let path_arg = path.to_str().unwrap();

        run(parse(&["--config", path_arg, "--no-color", "config", "init"])).unwrap();
        assert!(path.exists());

        // The file now loads for the other commands
        run(parse(&["--config", path_arg, "config", "show"])).unwrap();

        let again = run(parse(&["--config", path_arg, "config", "init"]));
        assert!(matches!(again, Err(CliError::Config(_))));
        run(parse(&["--config", path_arg, "config", "init", "--force"])).unwrap();
    }

    #[test]
    fn test_other_commands_require_existing_explicit_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");

        let result = run(parse(&["--config", path.to_str().unwrap(), "config", "show"]));
        assert!(matches!(result, Err(CliError::Config(_))));
    }
}
