use anyhow::Result;
use clap::Parser;

use roadnet::cli::Cli;
use roadnet::{config, logging, run};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = config::resolve(&cli)?;
    run(&config)
}
