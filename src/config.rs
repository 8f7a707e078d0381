//! Merging of the optional TOML configuration file with command-line flags

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use roadnet_core::AnalysisConfig;

use crate::cli::Cli;

/// Reads an [`AnalysisConfig`] from a TOML file.
///
/// # Errors
///
/// Fails if the file cannot be read or is not a valid configuration.
pub fn from_toml_file(path: &Path) -> Result<AnalysisConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

/// Builds the effective configuration, command-line values winning over the file.
///
/// # Errors
///
/// Fails if the config file is invalid or no input file is given anywhere.
pub fn resolve(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match (&cli.config, &cli.input) {
        (Some(path), _) => from_toml_file(path)?,
        (None, Some(input)) => AnalysisConfig::new(input),
        (None, None) => bail!("No input file given"),
    };

    if let Some(input) = &cli.input {
        config.input.clone_from(input);
    }
    if cli.output.is_some() {
        config.output.clone_from(&cli.output);
    }
    if cli.start.is_some() {
        config.start.clone_from(&cli.start);
    }
    if cli.finish.is_some() {
        config.finish.clone_from(&cli.finish);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    Ok(config)
}
