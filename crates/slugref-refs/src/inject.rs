//! Include directive injection.
//!
//! Appends the snippet directive that transcludes the link-reference file, so
//! every page can use `[slug]` and `[slug#anchor]` references.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use slugref_pages::PageEntry;

/// Name of the generated link-reference file inside the docs directory.
pub const LINK_REFS_FILENAME: &str = "link-refs.md";

/// Directive appended to each page.
pub const INCLUDE_DIRECTIVE: &str = r#"--8<-- "link-refs.md""#;

/// Injection error.
#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    /// Failed to read or rewrite a page.
    #[error("Failed to update {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of injecting into a single page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectOutcome {
    /// Directive was appended.
    Changed,
    /// Directive was already present.
    Unchanged,
    /// Page does not exist.
    Missing,
}

/// Append [`INCLUDE_DIRECTIVE`] to the page at `path` unless it already has it.
///
/// Trailing whitespace is trimmed and the directive follows one blank line.
/// Running it again on the same page is a no-op.
pub fn ensure_include(path: &Path) -> Result<InjectOutcome, InjectError> {
    let io_error = |source| InjectError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(InjectOutcome::Missing),
        Err(e) => return Err(io_error(e)),
    };

    if content.contains(INCLUDE_DIRECTIVE) {
        return Ok(InjectOutcome::Unchanged);
    }

    let updated = format!("{}\n\n{INCLUDE_DIRECTIVE}\n", content.trim_end());
    fs::write(path, updated).map_err(io_error)?;
    Ok(InjectOutcome::Changed)
}

/// Inject the directive into every page, returning how many were modified.
///
/// The link-reference file itself is skipped even when it is listed in the
/// navigation. Pages that cannot be read or rewritten are logged and skipped.
pub fn inject_includes(entries: &[PageEntry], link_refs_path: &Path) -> usize {
    let mut changed = 0;
    for entry in entries {
        if entry.full_path == link_refs_path {
            tracing::warn!(path = %entry.path, "Navigation lists the link-reference file, not injecting");
            continue;
        }
        match ensure_include(&entry.full_path) {
            Ok(InjectOutcome::Changed) => {
                tracing::info!(path = %entry.path, "Injected include directive");
                changed += 1;
            }
            Ok(InjectOutcome::Unchanged) => {}
            Ok(InjectOutcome::Missing) => {
                tracing::debug!(path = %entry.path, "Page not found, not injecting");
            }
            Err(e) => {
                tracing::warn!(path = %entry.path, error = %e, "Failed to inject include, skipping");
            }
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    fn page_entry(docs_dir: &Path, path: &str) -> PageEntry {
        PageEntry {
            path: path.to_owned(),
            title: None,
            slug: None,
            full_path: docs_dir.join(path),
            anchors: Vec::new(),
        }
    }

    #[test]
    fn test_appends_after_blank_line() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("page.md");
        fs::write(&path, "# Page\n\nBody text.\n\n\n").unwrap();

        assert_eq!(ensure_include(&path).unwrap(), InjectOutcome::Changed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# Page\n\nBody text.\n\n--8<-- \"link-refs.md\"\n"
        );
    }

    #[test]
    fn test_second_run_is_unchanged() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("page.md");
        fs::write(&path, "# Page").unwrap();

        assert_eq!(ensure_include(&path).unwrap(), InjectOutcome::Changed);
        let after_first = fs::read(&path).unwrap();

        assert_eq!(ensure_include(&path).unwrap(), InjectOutcome::Unchanged);
        assert_eq!(fs::read(&path).unwrap(), after_first);
        assert_eq!(
            fs::read_to_string(&path)
                .unwrap()
                .matches(INCLUDE_DIRECTIVE)
                .count(),
            1
        );
    }

    #[test]
    fn test_existing_directive_anywhere_is_respected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("page.md");
        let content = "--8<-- \"link-refs.md\"\n\n# Page\n";
        fs::write(&path, content).unwrap();

        assert_eq!(ensure_include(&path).unwrap(), InjectOutcome::Unchanged);
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
    }

    #[test]
    fn test_empty_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("empty.md");
        fs::write(&path, "").unwrap();

        assert_eq!(ensure_include(&path).unwrap(), InjectOutcome::Changed);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "\n\n--8<-- \"link-refs.md\"\n"
        );
    }

    #[test]
    fn test_missing_page() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("missing.md");

        assert_eq!(ensure_include(&path).unwrap(), InjectOutcome::Missing);
        assert!(!path.exists());
    }

    #[test]
    fn test_inject_includes_counts_changes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path();
        fs::write(docs.join("a.md"), "# A\n").unwrap();
        fs::write(docs.join("b.md"), format!("# B\n\n{INCLUDE_DIRECTIVE}\n")).unwrap();
        fs::write(docs.join(LINK_REFS_FILENAME), "[a]: /a\n").unwrap();

        let entries = [
            page_entry(docs, "a.md"),
            page_entry(docs, "b.md"),
            page_entry(docs, "missing.md"),
            page_entry(docs, LINK_REFS_FILENAME),
        ];
        let link_refs_path = docs.join(LINK_REFS_FILENAME);

        assert_eq!(inject_includes(&entries, &link_refs_path), 1);
        assert_eq!(
            fs::read_to_string(&link_refs_path).unwrap(),
            "[a]: /a\n"
        );
        assert_eq!(inject_includes(&entries, &link_refs_path), 0);
    }

    #[test]
    fn test_unreadable_page_does_not_stop_injection() {
        let temp_dir = tempfile::tempdir().unwrap();
        let docs = temp_dir.path();
        fs::write(docs.join("bad.md"), b"# Caf\xe9\n").unwrap();
        fs::write(docs.join("good.md"), "---\nslug: good\n---\n# Good\n").unwrap();

        let entries = [page_entry(docs, "bad.md"), page_entry(docs, "good.md")];
        let changed = inject_includes(&entries, &docs.join(LINK_REFS_FILENAME));

        assert_eq!(changed, 1);
        assert_eq!(fs::read(docs.join("bad.md")).unwrap(), b"# Caf\xe9\n");
        assert_eq!(
            fs::read_to_string(docs.join("good.md")).unwrap(),
            format!("---\nslug: good\n---\n# Good\n\n{INCLUDE_DIRECTIVE}\n")
        );
    }

    #[test]
    fn test_ensure_include_reports_invalid_utf8() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("bad.md");
        fs::write(&path, b"# Caf\xe9\n").unwrap();

        assert!(matches!(ensure_include(&path), Err(InjectError::Io { .. })));
    }
}
