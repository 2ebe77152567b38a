//! Get command implementation.

use anyhow::{Context, Result};
use jobs_client::JobsClient;
use tracing::info;

use crate::error::CliError;
use crate::formatters::{OutputFormat, get_formatter};

pub async fn run(client: &JobsClient, id: &str, format: OutputFormat) -> Result<()> {
    info!("Fetching job {}", id);

    let job = client
        .get(id)
        .await
        .with_context(|| format!("Failed to fetch job {}", id))?
        .ok_or_else(|| CliError::JobNotFound(id.to_string()))?;

    print!("{}", get_formatter(format).format_job(&job)?);
    Ok(())
}
