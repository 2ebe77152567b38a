//! Lazy traversal of paginated listings.
//!
//! A [`Traverser`] describes a listing (path plus query parameters) and
//! turns it into a stream on demand. Creating one performs no I/O; the first
//! request is sent when the returned stream is first polled.
//!
//! # Protocol
//! - The first page is `GET <path>?<params>`
//! - Each page body is a JSON array of job records
//! - The next page is the `Link` header entry with `rel="next"`; a missing
//!   entry ends the traversal
//!
//! # Invariants
//! - Every call to [`Traverser::pages`] or [`Traverser::stream`] starts over at
//!   the first page; an in-flight stream cannot be rewound
//! - A stream ends after yielding its first error
//! - A stream never requests the same page URL twice; a next link to an
//!   already visited page ends the traversal

use std::collections::HashSet;

use futures::stream::{self, Stream, StreamExt, TryStreamExt};
use reqwest::header::{HeaderMap, LINK};
use tracing::{debug, warn};
use url::Url;

use crate::error::{ClientError, Result};
use crate::instance::ApiInstance;
use crate::models::{Job, QueryParams};

/// Lazy, restartable description of a paginated listing.
#[derive(Debug, Clone)]
pub struct Traverser {
    instance: ApiInstance,
    path: String,
    params: QueryParams,
}

/// One fetched page and the link to the page after it.
struct Page {
    items: Vec<Job>,
    next: Option<Url>,
}

impl Traverser {
    /// Describe a listing; nothing is fetched until a stream is polled.
    pub fn new(instance: ApiInstance, path: impl Into<String>, params: QueryParams) -> Self {
        Self {
            instance,
            path: path.into(),
            params,
        }
    }

    /// API path of the listing.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters sent with the first page.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    /// Absolute URL of the first page.
    pub fn first_page_url(&self) -> Url {
        self.instance.url_for(&self.path, &self.params)
    }

    /// Stream of pages, starting from the first page.
    pub fn pages(&self) -> impl Stream<Item = Result<Vec<Job>>> + Send + 'static {
        let instance = self.instance.clone();
        let first = self.first_page_url();

        stream::try_unfold(
            (Some(first), HashSet::new()),
            move |(next, mut visited)| {
                let instance = instance.clone();
                async move {
                    let Some(url) = next else {
                        return Ok(None);
                    };
                    visited.insert(url.clone());
                    let page = fetch_page(&instance, url).await?;
                    let next = page.next.filter(|next| {
                        if visited.contains(next) {
                            warn!(url = %next, "Next-page link points at a visited page; stopping");
                            false
                        } else {
                            true
                        }
                    });
                    Ok(Some((page.items, (next, visited))))
                }
            },
        )
    }

    /// Stream of individual job records across all pages.
    pub fn stream(&self) -> impl Stream<Item = Result<Job>> + Send + 'static {
        self.pages()
            .map_ok(|items| stream::iter(items.into_iter().map(Ok::<Job, ClientError>)))
            .try_flatten()
    }

    /// Fetch every page and return all records.
    pub async fn collect_all(&self) -> Result<Vec<Job>> {
        self.stream().try_collect().await
    }

    /// Fetch records until `limit` have been collected.
    ///
    /// Pages beyond the one containing the last wanted record are not requested.
    pub async fn collect_up_to(&self, limit: usize) -> Result<Vec<Job>> {
        self.stream().take(limit).try_collect().await
    }
}

async fn fetch_page(instance: &ApiInstance, url: Url) -> Result<Page> {
    let response = instance.get_url(url).await?;
    let next = next_page_url(response.headers(), response.url());

    let body = response.text().await?;
    let items = match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(serde_json::Value::Array(items)) => items,
        Ok(other) => {
            return Err(ClientError::InvalidResponse(format!(
                "expected a JSON array of jobs, got {}",
                json_kind(&other)
            )));
        }
        Err(e) => {
            return Err(ClientError::InvalidResponse(format!(
                "failed to parse jobs page: {}",
                e
            )));
        }
    };

    debug!(
        count = items.len(),
        has_next = next.is_some(),
        "Fetched jobs page"
    );
    Ok(Page { items, next })
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Resolve the `rel="next"` target of the `Link` headers against the page URL.
fn next_page_url(headers: &HeaderMap, current: &Url) -> Option<Url> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(find_next_link)
        .and_then(|target| current.join(target).ok())
}

/// Find the target of the `rel="next"` entry in one `Link` header value.
///
/// Targets are delimited by `<...>` rather than split on commas, since
/// query strings (e.g. `fields=id,title`) may contain them.
fn find_next_link(value: &str) -> Option<&str> {
    let mut rest = value;
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let target = &after[..end];
        let tail = &after[end + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());

        if tail[..params_end].split(';').any(is_rel_next) {
            return Some(target.trim());
        }
        rest = &tail[params_end..];
    }
    None
}

fn is_rel_next(param: &str) -> bool {
    let Some((key, value)) = param.trim().split_once('=') else {
        return false;
    };
    key.trim().eq_ignore_ascii_case("rel")
        && value
            .trim()
            .trim_end_matches(',')
            .trim_matches('"')
            .split_whitespace()
            .any(|rel| rel.eq_ignore_ascii_case("next"))
}
