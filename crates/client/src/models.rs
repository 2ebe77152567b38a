//! Data models for the jobs API.
//!
//! Job records are passed through untouched; the client does not define
//! or validate their schema.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A job record as returned by the API.
pub type Job = serde_json::Value;

/// Query-string parameters for a jobs listing. Last write per key wins.
pub type QueryParams = BTreeMap<String, String>;

/// Error body shape used by the API for non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable message in the body, if any.
    pub fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.trim().is_empty())
    }
}
