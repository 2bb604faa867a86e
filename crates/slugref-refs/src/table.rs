//! Reference table assembly.

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use slugref_pages::PageEntry;

use crate::url::page_url;

/// Anchor already carrying a numeric `_N` suffix.
static ANCHOR_COUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(.*)_([0-9]+)$").unwrap());

/// One line of the overview table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverviewRow {
    pub path: String,
    /// Front matter title, empty when absent.
    pub title: String,
    /// Front matter slug, empty when absent.
    pub slug: String,
}

/// Overview rows and the three link-reference namespaces.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    /// One row per page, in navigation order.
    pub rows: Vec<OverviewRow>,
    /// `slug` to page URL.
    pub slug_refs: BTreeMap<String, String>,
    /// `slug#anchor` to page URL with fragment.
    pub anchor_refs: BTreeMap<String, String>,
    /// External identifier to absolute URL.
    pub external_refs: BTreeMap<String, String>,
}

impl ReferenceTable {
    /// Build the table from scanned pages and the external reference list.
    ///
    /// A slug belongs to the first page that declares it; later pages with the
    /// same slug are reported and contribute neither a slug nor anchor
    /// references.
    pub fn build(entries: &[PageEntry], external: &[(&str, &str)]) -> Self {
        let mut table = Self::default();

        for entry in entries {
            table.rows.push(OverviewRow {
                path: entry.path.clone(),
                title: entry.title.clone().unwrap_or_default(),
                slug: entry.slug.clone().unwrap_or_default(),
            });

            let Some(slug) = entry.slug() else {
                continue;
            };

            if let Some(existing) = table.slug_refs.get(slug) {
                tracing::warn!(
                    slug,
                    path = %entry.path,
                    existing = %existing,
                    "Duplicate slug, keeping first occurrence"
                );
                continue;
            }

            let url = page_url(&entry.path);
            for anchor in unique_anchors(&entry.anchors) {
                table
                    .anchor_refs
                    .insert(format!("{slug}#{anchor}"), format!("{url}#{anchor}"));
            }
            table.slug_refs.insert(slug.to_owned(), url);
        }

        table.external_refs = external
            .iter()
            .map(|(key, url)| ((*key).to_owned(), (*url).to_owned()))
            .collect();

        table
    }

    /// Total number of link-reference definitions.
    #[must_use]
    pub fn reference_count(&self) -> usize {
        self.slug_refs.len() + self.anchor_refs.len() + self.external_refs.len()
    }
}

/// Make repeated anchors unique the way the renderer's table of contents does:
/// `notes`, `notes_1`, `notes_2`, ...
fn unique_anchors(anchors: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    anchors
        .iter()
        .map(|anchor| {
            let mut id = anchor.clone();
            while seen.contains(&id) {
                let next = match ANCHOR_COUNT
                    .captures(&id)
                    .and_then(|caps| Some((caps.get(1)?.as_str(), caps[2].parse::<u64>().ok()?)))
                    .and_then(|(base, count)| Some((base, count.checked_add(1)?)))
                {
                    Some((base, count)) => format!("{base}_{count}"),
                    // Counters past u64 start a fresh suffix on the whole id.
                    None => format!("{id}_1"),
                };
                id = next;
            }
            seen.insert(id.clone());
            id
        })
        .collect()
}
