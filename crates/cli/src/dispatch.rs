//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to command handlers.
//! - Build the client and resolve the output format once for every command.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main`).

use anyhow::{Context, Result};
use jobs_client::JobsClient;
use jobs_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::commands::list::ListFilters;
use crate::formatters::OutputFormat;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;
    let client = JobsClient::builder()
        .from_config(&config)
        .build()
        .context("Failed to create client")?;

    match cli.command {
        Commands::Get { id } => {
            commands::get::run(&client, &id, format).await?;
        }
        Commands::List {
            brand,
            country,
            city,
            zip,
            fields,
            params,
            limit,
        } => {
            let filters = ListFilters {
                brand,
                country,
                city,
                zip,
                fields,
                params,
            };
            commands::list::run(&client, filters, limit, format, cancel_token).await?;
        }
    }

    Ok(())
}
