//! Overview and link-reference file output.
//!
//! Both files are regenerated from scratch on every run.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::table::ReferenceTable;

/// Output error.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Failed to create or write an output file.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Render the overview table as Markdown.
#[must_use]
pub fn render_overview(table: &ReferenceTable) -> String {
    let mut out = String::from("# Slugs\n\n| Path | Title | Slug |\n| --- | --- | --- |\n");
    for row in &table.rows {
        let _ = writeln!(out, "| `{}` | {} | `{}` |", row.path, row.title, row.slug);
    }
    out
}

/// Render the link-reference definitions.
///
/// Page slugs, slug anchors and external references each form a block sorted
/// by key. Non-empty blocks are separated by one blank line; with no
/// references at all the result is empty.
#[must_use]
pub fn render_link_refs(table: &ReferenceTable) -> String {
    // Each block ends with a newline, so joining on one more leaves a blank line.
    [&table.slug_refs, &table.anchor_refs, &table.external_refs]
        .into_iter()
        .filter(|refs| !refs.is_empty())
        .map(render_block)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block(refs: &BTreeMap<String, String>) -> String {
    let mut block = String::new();
    for (key, target) in refs {
        let _ = writeln!(block, "[{key}]: {target}");
    }
    block
}

/// Write the overview table to `path`, replacing any previous content.
pub fn write_overview(path: &Path, table: &ReferenceTable) -> Result<(), WriteError> {
    write_file(path, &render_overview(table))
}

/// Write the link-reference file to `path`, creating its directory if needed.
pub fn write_link_refs(path: &Path, table: &ReferenceTable) -> Result<(), WriteError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| WriteError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    write_file(path, &render_link_refs(table))
}

fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    fs::write(path, content).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "Wrote output file");
    Ok(())
}
