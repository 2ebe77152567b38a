//! Main jobs API client.
//!
//! [`JobsClient`] owns one [`ApiInstance`] and exposes the three access
//! patterns of the jobs resource: fetch by ID, lazy listing, and the fluent
//! [`JobsQuery`](crate::JobsQuery) builder.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `jobs`: Jobs resource methods
//!
//! # What this module does NOT handle:
//! - Request signing and sending (delegated to [`crate::instance`])
//! - Page traversal (delegated to [`crate::pagination`])
//! - Retries, rate limiting or token refresh
//!
//! # Invariants
//! - A client never changes its credentials or identity after construction
//! - Cloning a client shares the underlying connection pool

pub mod builder;
mod jobs;

use url::Url;

use crate::auth::AuthStrategy;
use crate::error::Result;
use crate::instance::ApiInstance;

pub use builder::JobsClientBuilder;

/// Options accepted by [`JobsClient::new`].
#[derive(Debug, Clone)]
pub struct JobsClientOptions {
    /// Credentials used for every request.
    pub auth: AuthStrategy,
    /// Optional application name folded into the `User-Agent`.
    pub application_name: Option<String>,
}

impl JobsClientOptions {
    /// Options with the given credentials and no application name.
    pub fn new(auth: AuthStrategy) -> Self {
        Self {
            auth,
            application_name: None,
        }
    }

    /// Set the application name.
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }
}

/// Client for the jobs REST resource.
#[derive(Debug, Clone)]
pub struct JobsClient {
    instance: ApiInstance,
}

impl JobsClient {
    /// Create a new client builder.
    pub fn builder() -> JobsClientBuilder {
        JobsClientBuilder::new()
    }

    /// Create a client against the default API host.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`](crate::ClientError::Configuration)
    /// if the credentials are incomplete.
    pub fn new(options: JobsClientOptions) -> Result<Self> {
        let mut builder = Self::builder().auth_strategy(options.auth);
        if let Some(name) = options.application_name {
            builder = builder.application_name(name);
        }
        builder.build()
    }

    pub(crate) fn from_instance(instance: ApiInstance) -> Self {
        Self { instance }
    }

    /// The authenticated handle this client sends requests through.
    pub fn instance(&self) -> &ApiInstance {
        &self.instance
    }

    /// Base URL of the API.
    pub fn base_url(&self) -> &Url {
        self.instance.base_url()
    }

    /// Identity string sent as `User-Agent`.
    pub fn user_agent(&self) -> &str {
        self.instance.user_agent()
    }
}
