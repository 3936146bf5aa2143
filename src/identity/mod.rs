//! Document identity helpers.
//!
//! A document is identified by a URI. Two URIs refer to the same logical
//! document when their path components are equal; scheme, query, and
//! fragment are transient qualifiers and are ignored for matching.

use url::Url;

/// Returns the comparison key for a document identity.
///
/// Matching is by path only: `file:///a/b.txt?rev=2` and
/// `remote:///a/b.txt` identify the same logical document.
pub fn path_key(uri: &Url) -> &str {
    uri.path()
}

/// Returns true if two URIs identify the same logical document.
pub fn same_document(a: &Url, b: &Url) -> bool {
    path_key(a) == path_key(b)
}

/// Derives a short human-readable label from a URI.
///
/// Uses the last non-empty path segment (the basename). URIs without
/// usable segments fall back to the raw path, then to the full URI
/// string (e.g. `untitled:` documents).
pub fn display_name(uri: &Url) -> String {
    if let Some(segments) = uri.path_segments() {
        if let Some(last) = segments.filter(|s| !s.is_empty()).last() {
            return last.to_string();
        }
    }

    let path = uri.path();
    if !path.is_empty() {
        path.to_string()
    } else {
        uri.to_string()
    }
}
