//! Site configuration loading for slugref.
//!
//! Reads an `mkdocs.yml` document with `serde_yaml` and exposes the two fields
//! slugref needs:
//!
//! - `docs_dir` - documentation root, relative to the configuration file
//!   (default `docs`)
//! - `nav` - the navigation tree (default: empty sequence)
//!
//! ## Custom Tags
//!
//! MkDocs configurations commonly reference Python callables through YAML
//! tags, e.g. `format: !!python/name:mermaid2.fence_mermaid`. The mermaid fence
//! tag is accepted and read as a plain scalar. Any other custom tag is
//! rejected with [`ConfigError::UnsupportedTag`].

mod nav;
mod tags;

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

pub use nav::{DOCUMENT_EXTENSION, extract_nav_paths};

/// Configuration filename looked up when no explicit path is given.
pub const CONFIG_FILENAME: &str = "mkdocs.yml";

/// Documentation root used when `docs_dir` is absent.
pub const DEFAULT_DOCS_DIR: &str = "docs";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Could not find {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// Custom tag without an opaque-scalar mapping.
    #[error("Unsupported YAML tag: {0}")]
    UnsupportedTag(String),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Parsed site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Documentation root as written in the configuration.
    pub docs_dir: String,
    /// Navigation tree (mapping/sequence/scalar structure).
    pub nav: Value,
    /// Directory relative paths are resolved against.
    config_dir: PathBuf,
}

impl SiteConfig {
    /// Load configuration from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] if the file does not exist, and a parse,
    /// tag or validation error if its content is not a usable configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let config_dir = path.parent().unwrap_or(Path::new("."));
        let config = Self::from_yaml_str(&content, config_dir)?;

        tracing::debug!(
            path = %path.display(),
            docs_dir = %config.docs_dir,
            "Loaded site configuration"
        );
        Ok(config)
    }

    /// Parse configuration from YAML text, resolving paths against `base_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, uses an unsupported tag, or
    /// has fields of the wrong shape.
    pub fn from_yaml_str(content: &str, base_dir: &Path) -> Result<Self, ConfigError> {
        let mut root = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(content)?
        };
        tags::resolve_tags(&mut root)?;

        let mut mapping = match root {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => {
                return Err(ConfigError::Validation(
                    "configuration root must be a mapping".to_owned(),
                ));
            }
        };

        let docs_dir = match mapping.remove("docs_dir") {
            None | Some(Value::Null) => DEFAULT_DOCS_DIR.to_owned(),
            Some(Value::String(dir)) => dir,
            Some(_) => {
                return Err(ConfigError::Validation(
                    "docs_dir must be a string".to_owned(),
                ));
            }
        };

        let nav = match mapping.remove("nav") {
            None | Some(Value::Null) => Value::Sequence(Vec::new()),
            Some(nav) => nav,
        };

        Ok(Self {
            docs_dir,
            nav,
            config_dir: base_dir.to_path_buf(),
        })
    }

    /// Directory containing the configuration file.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Documentation root resolved against the configuration directory.
    #[must_use]
    pub fn docs_path(&self) -> PathBuf {
        self.config_dir.join(&self.docs_dir)
    }

    /// Unique page paths from the navigation tree, in navigation order.
    #[must_use]
    pub fn nav_paths(&self) -> Vec<String> {
        extract_nav_paths(&self.nav)
    }
}
