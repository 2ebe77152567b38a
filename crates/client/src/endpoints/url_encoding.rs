//! Percent-encoding for resource identifiers placed in URL paths.
//!
//! Job IDs come from callers and are interpolated into `/v1/jobs/<id>`.
//! Without encoding, an ID containing `/` would address a nested path and
//! one containing `?` or `#` would truncate the path.
//!
//! # Example
//!
//! ```
//! use jobs_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("job/42");
//! assert_eq!(encoded, "job%2F42");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in a single URL path segment.
///
/// RFC 3986 section 3.3 reserved and unsafe characters, plus `%` so that
/// pre-encoded input is not decoded a second time by the server.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use jobs_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("42"), "42");
/// assert_eq!(encode_path_segment("a b"), "a%20b");
/// assert_eq!(encode_path_segment("100%"), "100%25");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
