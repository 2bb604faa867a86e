//! Link-reference generation for slugref.
//!
//! Turns scanned pages into:
//!
//! - an overview table of every navigation page (`slugs.md`)
//! - a link-reference file (`link-refs.md`) with page slugs, slug anchors and
//!   external references
//!
//! and injects the snippet directive that makes those references available on
//! every page.

mod external;
mod inject;
mod table;
mod url;
mod writer;

pub use external::EXTERNAL_REFERENCES;
pub use inject::{
    INCLUDE_DIRECTIVE, InjectError, InjectOutcome, LINK_REFS_FILENAME, ensure_include,
    inject_includes,
};
pub use table::{OverviewRow, ReferenceTable};
pub use url::page_url;
pub use writer::{WriteError, render_link_refs, render_overview, write_link_refs, write_overview};

/// Overview table filename, written next to the site configuration.
pub const OVERVIEW_FILENAME: &str = "slugs.md";
