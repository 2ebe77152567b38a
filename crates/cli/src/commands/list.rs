//! List command implementation.
//!
//! NDJSON output is written as records arrive; JSON output is written once
//! the listing is complete so that it forms a single array.

use anyhow::{Context, Result};
use futures::{StreamExt, TryStreamExt};
use jobs_client::{Job, JobsClient, Traverser};
use std::io::Write;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::formatters::{OutputFormat, get_formatter};

/// Listing filters taken from the command line.
#[derive(Debug, Default)]
pub struct ListFilters {
    pub brand: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub fields: Vec<String>,
    pub params: Vec<(String, String)>,
}

/// Turn the filters into a traverser through the fluent query builder.
///
/// Generic `--param` pairs are applied first so named filters win on conflict.
pub fn build_traverser(client: &JobsClient, filters: ListFilters) -> Traverser {
    let mut query = client.begin_query();
    for (key, value) in filters.params {
        query.set(key, value);
    }
    if let Some(brand) = filters.brand {
        query.of_brand(brand);
    }
    if let Some(country) = filters.country {
        query.in_country(country);
    }
    if let Some(city) = filters.city {
        query.in_city(city);
    }
    if let Some(zip) = filters.zip {
        query.in_zip(zip);
    }
    if !filters.fields.is_empty() {
        query.pick(&filters.fields);
    }
    query.execute()
}

pub async fn run(
    client: &JobsClient,
    filters: ListFilters,
    limit: Option<usize>,
    format: OutputFormat,
    cancel: &CancellationToken,
) -> Result<()> {
    let traverser = build_traverser(client, filters);
    info!(params = ?traverser.params(), "Listing jobs");

    let jobs = traverser.stream().take(limit.unwrap_or(usize::MAX));
    let formatter = get_formatter(format);

    match format {
        OutputFormat::Ndjson => {
            let mut jobs = std::pin::pin!(jobs);
            let mut stdout = std::io::stdout().lock();
            loop {
                let next = tokio::select! {
                    next = jobs.next() => next,
                    _ = cancel.cancelled() => return Err(Cancelled.into()),
                };
                let Some(job) = next else { break };
                let job = job.context("Failed to list jobs")?;
                stdout.write_all(formatter.format_job(&job)?.as_bytes())?;
            }
            stdout.flush()?;
        }
        OutputFormat::Json => {
            let jobs: Vec<Job> = tokio::select! {
                jobs = jobs.try_collect() => jobs.context("Failed to list jobs")?,
                _ = cancel.cancelled() => return Err(Cancelled.into()),
            };
            print!("{}", formatter.format_jobs(&jobs)?);
        }
    }

    Ok(())
}
