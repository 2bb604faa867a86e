//! Page scanning for slugref.
//!
//! Reads each navigation page once and extracts:
//!
//! - `title` and `slug` from the YAML front matter ([`FrontMatter`])
//! - heading anchors from the body ([`anchors_from_content`])
//!
//! Per-page problems never fail a scan. A missing page, an unterminated front
//! matter block or invalid YAML all produce an entry without title, slug or
//! anchors.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use slugref_pages::scan_pages;
//!
//! let entries = scan_pages(Path::new("docs"), &["index.md".to_owned()]);
//! for entry in &entries {
//!     println!("{}: {:?}", entry.path, entry.slug);
//! }
//! ```

mod anchors;
mod front_matter;

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

pub use anchors::{anchors_from_content, extract_anchors, normalize_anchor};
pub use front_matter::{FrontMatter, parse_front_matter};

/// A navigation page and the data scanned from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    /// Path as listed in the navigation tree (e.g. `guides/setup.md`).
    pub path: String,
    /// Title from front matter.
    pub title: Option<String>,
    /// Slug from front matter.
    pub slug: Option<String>,
    /// Location on disk (docs directory joined with `path`).
    pub full_path: PathBuf,
    /// Heading anchors in document order. Only collected for pages with a slug.
    pub anchors: Vec<String>,
}

impl PageEntry {
    /// Scan the page at `docs_dir/path`.
    pub fn scan(docs_dir: &Path, path: &str) -> Self {
        let full_path = docs_dir.join(path);
        let content = read_page(&full_path);

        let FrontMatter { title, slug } = content
            .as_deref()
            .map(FrontMatter::from_content)
            .unwrap_or_default();

        let has_slug = slug.as_deref().is_some_and(|s| !s.trim().is_empty());
        let anchors = match content.as_deref() {
            Some(content) if has_slug => anchors_from_content(content),
            _ => Vec::new(),
        };

        Self {
            path: path.to_owned(),
            title,
            slug,
            full_path,
            anchors,
        }
    }

    /// Slug with surrounding whitespace removed, if non-empty.
    #[must_use]
    pub fn slug(&self) -> Option<&str> {
        self.slug
            .as_deref()
            .map(str::trim)
            .filter(|slug| !slug.is_empty())
    }
}

/// Scan all `paths` under `docs_dir`.
///
/// Pages are read in parallel; the result keeps the order of `paths`.
pub fn scan_pages(docs_dir: &Path, paths: &[String]) -> Vec<PageEntry> {
    let entries: Vec<PageEntry> = paths
        .par_iter()
        .map(|path| PageEntry::scan(docs_dir, path))
        .collect();

    tracing::debug!(
        page_count = entries.len(),
        with_slug = entries.iter().filter(|e| e.slug().is_some()).count(),
        "Page scan completed"
    );
    entries
}

/// Read a page, logging and returning `None` when it is missing or unreadable.
pub(crate) fn read_page(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Page not found, skipping");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read page, skipping");
            None
        }
    }
}
