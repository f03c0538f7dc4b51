//! Map widget CLI
//!
//! Suggests origins, resolves routes to the configured destination and
//! renders the direction panel and map scene.

#![allow(clippy::print_stdout)]

mod cli;
mod commands;
mod repl;

use clap::Parser;
use infrastructure::{AppConfig, init_telemetry};

use crate::cli::{Cli, Commands, log_filter_from_verbosity};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config)?;
    if cli.verbose > 0 {
        config.telemetry.log_filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Config { check } => commands::show_config(&config, check)?,

        Commands::Suggest { query } => {
            let controller = commands::connect(&config, cli.ephemeral).await?;
            commands::suggest(&controller, &config, &query).await?;
        },

        Commands::Directions(args) => {
            let controller = commands::connect(&config, cli.ephemeral).await?;
            commands::directions(&controller, &config, args).await?;
        },

        Commands::Interactive => {
            let controller = commands::connect(&config, cli.ephemeral).await?;
            repl::run(&controller, &config).await?;
        },
    }

    Ok(())
}
