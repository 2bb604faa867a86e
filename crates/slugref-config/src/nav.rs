//! Page discovery from the `nav` tree.

use std::collections::HashSet;

use serde_yaml::Value;

/// Extension identifying documentation pages in the navigation tree.
pub const DOCUMENT_EXTENSION: &str = ".md";

/// Collect page paths from a navigation tree.
///
/// Sequences are walked item by item and mappings value by value, in source
/// order. Strings ending in [`DOCUMENT_EXTENSION`] are pages; external links,
/// numbers and other scalars are ignored. The result keeps the first
/// occurrence of every path.
///
/// # Examples
///
/// ```
/// use slugref_config::extract_nav_paths;
///
/// let nav = serde_yaml::from_str("- A: a.md\n- B: [b.md, a.md]\n").unwrap();
/// assert_eq!(extract_nav_paths(&nav), vec!["a.md", "b.md"]);
/// ```
#[must_use]
pub fn extract_nav_paths(nav: &Value) -> Vec<String> {
    let mut paths = Vec::new();
    collect_paths(nav, &mut paths);

    let mut seen = HashSet::new();
    paths.retain(|path| seen.insert(path.clone()));
    paths
}

fn collect_paths(value: &Value, paths: &mut Vec<String>) {
    match value {
        Value::String(path) if path.ends_with(DOCUMENT_EXTENSION) => paths.push(path.clone()),
        Value::Sequence(items) => {
            for item in items {
                collect_paths(item, paths);
            }
        }
        Value::Mapping(mapping) => {
            for item in mapping.values() {
                collect_paths(item, paths);
            }
        }
        _ => {}
    }
}
