//! CLI entry point for the walker path generator

use clap::Parser;
use tracing_subscriber::EnvFilter;
use walkerpaths::io::cli::{Cli, SimulationRunner};

fn main() -> walkerpaths::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let runner = SimulationRunner::new(cli);
    runner.run().map(|_| ())
}
