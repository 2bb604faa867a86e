//! Resolution of custom YAML tags in a loaded configuration.

use serde_yaml::Value;
use serde_yaml::value::TaggedValue;

use crate::ConfigError;

/// Tags read as plain scalars, without the YAML core-schema prefix.
const OPAQUE_SCALAR_TAGS: &[&str] = &["python/name:mermaid2.fence_mermaid"];

/// Prefix libyaml expands the `!!` handle to.
const CORE_SCHEMA_PREFIX: &str = "tag:yaml.org,2002:";

/// Replace opaque-scalar tags with their string value, in place.
///
/// Fails on the first tag that has no opaque-scalar mapping.
pub(crate) fn resolve_tags(value: &mut Value) -> Result<(), ConfigError> {
    match value {
        Value::Tagged(tagged) => {
            let name = tag_name(tagged);
            if !OPAQUE_SCALAR_TAGS.contains(&name.as_str()) {
                return Err(ConfigError::UnsupportedTag(tagged.tag.to_string()));
            }
            let text = scalar_text(&tagged.value);
            *value = Value::String(text);
        }
        Value::Sequence(items) => {
            for item in items {
                resolve_tags(item)?;
            }
        }
        Value::Mapping(mapping) => {
            for item in mapping.values_mut() {
                resolve_tags(item)?;
            }
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
    Ok(())
}

/// Tag name with leading `!` and the core-schema prefix removed.
fn tag_name(tagged: &TaggedValue) -> String {
    let raw = tagged.tag.to_string();
    let name = raw.trim_start_matches('!');
    name.strip_prefix(CORE_SCHEMA_PREFIX)
        .unwrap_or(name)
        .to_owned()
}

/// Text of a tagged scalar; empty for null and non-scalars.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
