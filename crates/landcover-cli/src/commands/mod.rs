//! Command implementations

mod analyze;
mod config;
mod providers;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;
use anyhow::{Context, Result};

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = crate::config::load(cli.config.as_deref(), cli.overrides())
        .context("Failed to load configuration")?;

    match cli.command {
        Commands::Analyze(args) => analyze::execute(args, &config, &output).await,
        Commands::Providers => providers::execute(&config, &output),
        Commands::Config => config::execute(&config, &output),
    }
}
