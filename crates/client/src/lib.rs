//! Jobs REST API client.
//!
//! This crate provides a thin, type-safe client for the Salling Group
//! "jobs" resource. It supports JWT and bearer authentication, fetches
//! single jobs by ID, and exposes paginated listings as lazy streams,
//! optionally narrowed through the fluent [`JobsQuery`] builder.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod instance;
pub mod models;
pub mod pagination;
pub mod query;

pub use auth::AuthStrategy;
pub use client::builder::JobsClientBuilder;
pub use client::{JobsClient, JobsClientOptions};
pub use error::{ClientError, Result};
pub use instance::ApiInstance;
pub use models::{Job, QueryParams};
pub use pagination::Traverser;
pub use query::JobsQuery;
