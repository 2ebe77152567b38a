//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration sources (see `main`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jobs-cli")]
#[command(about = "Jobs CLI - Query job listings from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jobs-cli get 12345\n  jobs-cli list --brand netto --country dk\n  jobs-cli list --city Aarhus --fields id,title --limit 20\n  jobs-cli --output ndjson list --param sort=newest\n"
)]
pub struct Cli {
    /// Base URL of the API (e.g., https://api.sallinggroup.com)
    #[arg(short, long, global = true, env = "SALLING_BASE_URL")]
    pub base_url: Option<String>,

    /// Account email for JWT authentication
    #[arg(short, long, global = true, env = "SALLING_EMAIL")]
    pub email: Option<String>,

    /// Shared secret for JWT authentication
    #[arg(short, long, global = true, env = "SALLING_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// Bearer token (preferred over email/secret)
    #[arg(short, long, global = true, env = "SALLING_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Application name sent in the User-Agent
    #[arg(long, global = true, env = "SALLING_APPLICATION_NAME")]
    pub application_name: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "SALLING_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Path to a JSON options file.
    ///
    /// Can also be set via SALLING_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "SALLING_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format (json, ndjson)
    #[arg(short, long, global = true, default_value = "json")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one job by ID
    Get {
        /// Job ID
        id: String,
    },

    /// List jobs, optionally filtered
    List {
        /// Only jobs of this brand
        #[arg(long)]
        brand: Option<String>,

        /// Only jobs in this country
        #[arg(long)]
        country: Option<String>,

        /// Only jobs in this city
        #[arg(long)]
        city: Option<String>,

        /// Only jobs in this postal code
        #[arg(long)]
        zip: Option<String>,

        /// Fields to return (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,

        /// Extra query parameter as KEY=VALUE (repeatable)
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        params: Vec<(String, String)>,

        /// Stop after this many jobs
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Parse a `KEY=VALUE` pair. The value may itself contain `=`.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got `{s}`"))?;
    if key.trim().is_empty() {
        return Err(format!("empty key in `{s}`"));
    }
    Ok((key.trim().to_string(), value.to_string()))
}
