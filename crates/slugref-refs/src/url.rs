//! Site URLs for navigation pages.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use slugref_config::DOCUMENT_EXTENSION;

/// Characters left as-is in page URLs: unreserved characters and `/`.
const PATH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Site-root URL of the page at navigation path `path`.
///
/// Drops the document extension, percent-encodes the rest (keeping `/`), and
/// maps the root `index` page to `/`.
///
/// # Examples
///
/// ```
/// use slugref_refs::page_url;
///
/// assert_eq!(page_url("a/b.md"), "/a/b");
/// assert_eq!(page_url("index.md"), "/");
/// assert_eq!(page_url("My Page.md"), "/My%20Page");
/// ```
#[must_use]
pub fn page_url(path: &str) -> String {
    let encoded = utf8_percent_encode(strip_document_extension(path), PATH_ENCODE_SET).to_string();
    if encoded == "index" {
        "/".to_owned()
    } else {
        format!("/{encoded}")
    }
}

/// Remove a trailing document extension, ignoring ASCII case.
fn strip_document_extension(path: &str) -> &str {
    path.len()
        .checked_sub(DOCUMENT_EXTENSION.len())
        .and_then(|split| Some((split, path.get(split..)?)))
        .filter(|(_, ext)| ext.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        .map_or(path, |(split, _)| &path[..split])
}
