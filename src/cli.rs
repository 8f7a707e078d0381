use std::path::PathBuf;

use clap::Parser;
use roadnet_core::ReportFormat;

#[derive(Parser, Debug)]
#[command(name = "roadnet")]
#[command(
    about = "Fastest routes and barely connected maps for road networks",
    long_about = None
)]
pub struct Cli {
    /// Tab-separated network description
    #[arg(required_unless_present = "config")]
    pub input: Option<PathBuf>,

    /// Report destination, printed to stdout when omitted
    pub output: Option<PathBuf>,

    /// TOML configuration file; command-line values take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start location, overrides the one declared in the input
    #[arg(long)]
    pub start: Option<String>,

    /// Finish location, overrides the one declared in the input
    #[arg(long)]
    pub finish: Option<String>,

    /// Report format: text or json
    #[arg(short, long)]
    pub format: Option<ReportFormat>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
