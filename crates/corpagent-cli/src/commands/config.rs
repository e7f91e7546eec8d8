//! Config command implementation.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::{Path, PathBuf};

/// Print the effective configuration.
pub fn execute_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration to `path` (or the default location).
pub fn execute_init(path: Option<&Path>, force: bool, formatter: &Formatter) -> Result<()> {
    let path = target_path(path)?;
    init(&path, force)?;
    println!(
        "{}",
        formatter.success(&format!("Configuration written to {}", path.display()))
    );
    Ok(())
}

fn target_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::default_path(),
    }
}

/// Write the default configuration, refusing to clobber an existing file.
fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    Config::default().save(path)
}
