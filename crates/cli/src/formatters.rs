//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Render job records as pretty JSON or NDJSON.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - An empty listing renders as `[]` in JSON and as nothing in NDJSON.
//! - NDJSON output is one record per line, each line terminated by `\n`.

use anyhow::Result;
use jobs_client::Job;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Ndjson,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "ndjson" => Ok(OutputFormat::Ndjson),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, ndjson", s),
        }
    }
}

/// Formatter trait for the output formats.
pub trait Formatter {
    /// Format one job.
    fn format_job(&self, job: &Job) -> Result<String>;

    /// Format a complete listing.
    fn format_jobs(&self, jobs: &[Job]) -> Result<String>;
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_job(&self, job: &Job) -> Result<String> {
        Ok(serde_json::to_string_pretty(job)? + "\n")
    }

    fn format_jobs(&self, jobs: &[Job]) -> Result<String> {
        Ok(serde_json::to_string_pretty(jobs)? + "\n")
    }
}

/// Newline-delimited JSON.
pub struct NdjsonFormatter;

impl Formatter for NdjsonFormatter {
    fn format_job(&self, job: &Job) -> Result<String> {
        Ok(serde_json::to_string(job)? + "\n")
    }

    fn format_jobs(&self, jobs: &[Job]) -> Result<String> {
        let mut output = String::new();
        for job in jobs {
            output.push_str(&self.format_job(job)?);
        }
        Ok(output)
    }
}

/// Get a formatter for the specified format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Ndjson => Box::new(NdjsonFormatter),
    }
}
