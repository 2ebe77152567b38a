//! REST API endpoint implementations.
//!
//! Each function here maps one HTTP call of the jobs resource onto an
//! [`ApiInstance`](crate::ApiInstance) and interprets its response.

mod jobs;
pub mod url_encoding;

pub use jobs::{JOBS_PATH, get_job, job_path, list_jobs};
pub use url_encoding::encode_path_segment;
