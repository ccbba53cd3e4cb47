//! Pagination helpers for Okta list endpoints
//!
//! Okta paginates with RFC 5988 `Link` headers. A response may carry several
//! `Link` headers (typically `rel="self"` and `rel="next"`), and a single header
//! may also hold several comma-separated links. The last page has no `next` link.

use log::warn;
use reqwest::header::{HeaderMap, LINK};

/// Find the URL of the next page in the response headers, if any.
///
/// A `Link` header that is not valid text is skipped with a warning.
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| match value.to_str() {
            Ok(text) => Some(text),
            Err(_) => {
                warn!("Ignoring unreadable Link header: {:?}", value);
                None
            }
        })
        .find_map(|value| find_link(value, "next"))
}

/// Split a `Link` header value into its links.
///
/// Commas inside `<...>` belong to the target URL and do not separate links.
fn split_links(header: &str) -> Vec<&str> {
    let mut links = Vec::new();
    let mut in_target = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' => in_target = true,
            '>' => in_target = false,
            ',' if !in_target => {
                links.push(&header[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    links.push(&header[start..]);
    links
}

/// Find the target of the first link with relation `rel` in a `Link` header value.
///
/// Relation matching is case-insensitive and supports space-separated
/// relation lists such as `rel="next last"`.
pub fn find_link(header: &str, rel: &str) -> Option<String> {
    split_links(header).into_iter().find_map(|link| {
        let mut parts = link.split(';');
        let target = parts.next()?.trim();
        let url = target.strip_prefix('<')?.strip_suffix('>')?;

        let has_rel = parts.any(|param| match param.split_once('=') {
            Some((key, value)) if key.trim().eq_ignore_ascii_case("rel") => value
                .trim()
                .trim_matches('"')
                .split_whitespace()
                .any(|r| r.eq_ignore_ascii_case(rel)),
            _ => false,
        });

        has_rel.then(|| url.to_string())
    })
}
