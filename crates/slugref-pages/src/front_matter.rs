//! Front matter extraction.
//!
//! A page may open with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Position & Liquidity
//! slug: position-liquidity
//! ---
//! # Body starts here
//! ```
//!
//! Missing pages, unterminated blocks and invalid YAML all read as "no front
//! matter"; nothing in this module fails.

use std::path::Path;

use serde_yaml::Value;

/// Marker line opening and closing the metadata block.
const DELIMITER: &str = "---";

/// Fields slugref reads from a page's front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl FrontMatter {
    /// Parse front matter from page content.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let Some((yaml, _body)) = split_front_matter(content) else {
            return Self::default();
        };
        if yaml.trim().is_empty() {
            return Self::default();
        }

        match serde_yaml::from_str::<Value>(yaml) {
            Ok(Value::Mapping(mapping)) => Self {
                title: mapping.get("title").and_then(scalar_string),
                slug: mapping.get("slug").and_then(scalar_string),
            },
            Ok(Value::Null) => Self::default(),
            Ok(_) => {
                tracing::debug!("Front matter is not a mapping, ignoring");
                Self::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "Invalid front matter, ignoring");
                Self::default()
            }
        }
    }
}

/// Read title and slug from the page at `path`.
///
/// Returns empty front matter if the page does not exist or cannot be read.
pub fn parse_front_matter(path: &Path) -> FrontMatter {
    crate::read_page(path)
        .map(|content| FrontMatter::from_content(&content))
        .unwrap_or_default()
}

/// Split content into the YAML between the delimiters and the remaining body.
///
/// Returns `None` when the first line is not a delimiter or the block is never
/// closed.
pub(crate) fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim() != DELIMITER {
        return None;
    }

    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        if line.trim() == DELIMITER {
            return Some((&content[yaml_start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Render a YAML scalar as text. Null and collections have no text form.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
