//! Jobs resource methods for [`JobsClient`].
//!
//! # What this module handles:
//! - Fetching one job by ID
//! - Lazy listings, filtered or not
//! - Starting a [`JobsQuery`]
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])

use crate::client::JobsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Job, QueryParams};
use crate::pagination::Traverser;
use crate::query::JobsQuery;

impl JobsClient {
    /// Get a single job by ID.
    ///
    /// Returns `Ok(None)` when the job does not exist (HTTP 404). Any other
    /// failure, including other non-2xx statuses, is returned as an error.
    pub async fn get(&self, job_id: &str) -> Result<Option<Job>> {
        endpoints::get_job(self.instance(), job_id).await
    }

    /// List jobs matching `params`.
    ///
    /// No request is sent here; the returned [`Traverser`] fetches pages when
    /// its stream is polled.
    pub fn query(&self, params: QueryParams) -> Traverser {
        endpoints::list_jobs(self.instance(), params)
    }

    /// List all jobs. Same as `query` with no parameters.
    pub fn get_all(&self) -> Traverser {
        self.query(QueryParams::new())
    }

    /// Start a fluent query bound to this client.
    pub fn begin_query(&self) -> JobsQuery<'_> {
        JobsQuery::new(self)
    }
}
