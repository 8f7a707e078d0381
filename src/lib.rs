//! Command-line front end for `roadnet_core`.

pub mod cli;
pub mod config;
pub mod logging;

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use roadnet_core::prelude::*;

/// Loads the network named by `config`, analyses it and returns the rendered report.
///
/// # Errors
///
/// Fails if the configuration is invalid, the input cannot be read or parsed,
/// or the report cannot be rendered.
pub fn analyse(config: &AnalysisConfig) -> Result<String> {
    config.validate()?;

    let network = load_network(&config.input)
        .with_context(|| format!("Failed to load network from {}", config.input.display()))?;
    let start = config.start.as_deref().unwrap_or(&network.start);
    let finish = config.finish.as_deref().unwrap_or(&network.finish);

    let analysis = MapAnalysis::run(&network.roads, start, finish)?;
    analysis
        .render(config.format)
        .context("Failed to render report")
}

/// Runs [`analyse`] and writes the report to the configured destination.
///
/// # Errors
///
/// Propagates analysis errors and failures to write the output file.
pub fn run(config: &AnalysisConfig) -> Result<()> {
    let report = analyse(config)?;

    match &config.output {
        Some(path) => {
            fs::write(path, &report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{report}"),
    }
    Ok(())
}
