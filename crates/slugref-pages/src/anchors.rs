//! Heading anchor extraction.
//!
//! Anchors are derived the way MkDocs' table-of-contents extension builds
//! heading ids, so that `[slug#anchor]` references resolve on the rendered
//! site.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::front_matter::split_front_matter;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_-]").unwrap());

static DASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());

/// Convert heading text to an anchor id.
///
/// Lower-cases and trims the text, turns whitespace runs into `-`, drops
/// everything except `a-z`, `0-9`, `-` and `_`, then collapses and trims
/// dashes. Applying it to its own output is a no-op.
///
/// # Examples
///
/// ```
/// use slugref_pages::normalize_anchor;
///
/// assert_eq!(normalize_anchor("Position & Liquidity"), "position-liquidity");
/// assert_eq!(normalize_anchor("3. Appendices!!"), "3-appendices");
/// ```
#[must_use]
pub fn normalize_anchor(text: &str) -> String {
    let lowered = text.to_lowercase();
    let dashed = WHITESPACE_RUN.replace_all(lowered.trim(), "-");
    let filtered = DISALLOWED_CHARS.replace_all(&dashed, "");
    let collapsed = DASH_RUN.replace_all(&filtered, "-");
    collapsed.trim_matches('-').to_owned()
}

/// Anchors for every heading in `content`, in document order.
///
/// The front matter block is skipped. Headings that normalize to nothing
/// produce no anchor; repeated headings produce repeated anchors.
#[must_use]
pub fn anchors_from_content(content: &str) -> Vec<String> {
    let body = split_front_matter(content).map_or(content, |(_, body)| body);

    body.lines()
        .filter_map(heading_text)
        .map(normalize_anchor)
        .filter(|anchor| !anchor.is_empty())
        .collect()
}

/// Anchors for every heading in the page at `path`.
///
/// Returns an empty list if the page does not exist or cannot be read.
pub fn extract_anchors(path: &Path) -> Vec<String> {
    crate::read_page(path)
        .map(|content| anchors_from_content(&content))
        .unwrap_or_default()
}

/// Text of a `#` heading line, or `None` for other lines and empty headings.
fn heading_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('#') {
        return None;
    }
    let text = trimmed.trim_start_matches('#').trim();
    (!text.is_empty()).then_some(text)
}
