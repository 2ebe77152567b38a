//! Jobs resource endpoints.

use tracing::debug;

use crate::endpoints::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::instance::ApiInstance;
use crate::models::{Job, QueryParams};
use crate::pagination::Traverser;

/// Collection path of the jobs resource.
pub const JOBS_PATH: &str = "/v1/jobs/";

/// Path of a single job.
pub fn job_path(job_id: &str) -> String {
    format!("{}{}", JOBS_PATH, encode_path_segment(job_id))
}

/// Get a single job.
///
/// Returns `Ok(None)` when the API answers 404; every other failure is
/// returned unchanged.
pub async fn get_job(instance: &ApiInstance, job_id: &str) -> Result<Option<Job>> {
    let response = match instance.get(&job_path(job_id), &QueryParams::new()).await {
        Ok(response) => response,
        Err(e) if e.is_not_found() => {
            debug!(job_id, "Job not found");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map(Some)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job: {}", e)))
}

/// Describe a jobs listing. No request is sent until the traverser is iterated.
pub fn list_jobs(instance: &ApiInstance, params: QueryParams) -> Traverser {
    Traverser::new(instance.clone(), JOBS_PATH, params)
}
