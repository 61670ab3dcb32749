//! Single-key JSON merge for tool settings files
//!
//! Copies one top-level key from a source settings document into a target
//! document, leaving every other target key untouched. Both files are JSON
//! regardless of their names. The source side is strict; a missing or
//! malformed target is treated as `{}`.

use agents_fs::{Error as FsError, io};
use serde_json::{Map, Value};
use std::path::Path;

use crate::Result;

/// Default key merged from the project settings into the tool settings.
pub const PERMISSIONS_KEY: &str = "permissions";

/// Merges one named top-level key between JSON documents.
#[derive(Debug, Clone)]
pub struct FieldMerge {
    key: String,
}

impl FieldMerge {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Merger for the `"permissions"` key.
    pub fn permissions() -> Self {
        Self::new(PERMISSIONS_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Set `key` in `target` to the value it has in `source` (or `{}` when
    /// `source` lacks it) and rewrite `target` as pretty JSON.
    pub fn merge(&self, source: &Path, target: &Path) -> Result<()> {
        let value = self.source_value(source)?;

        let mut document = target_document(target);
        document.insert(self.key.clone(), value);

        write_json(target, &Value::Object(document))?;
        tracing::debug!(
            key = %self.key,
            source = %source.display(),
            target = %target.display(),
            "merged settings key"
        );
        Ok(())
    }

    fn source_value(&self, source: &Path) -> Result<Value> {
        let value = match read_json(source)? {
            Value::Object(mut map) => map.remove(&self.key),
            Value::Null => None,
            _ => {
                return Err(parse_error(source, "expected a JSON object at the top level").into());
            }
        };
        Ok(value.unwrap_or_else(|| Value::Object(Map::new())))
    }
}

fn target_document(target: &Path) -> Map<String, Value> {
    if !target.exists() {
        return Map::new();
    }
    match read_json(target) {
        Ok(Value::Object(map)) => map,
        Ok(_) => {
            tracing::warn!(path = %target.display(), "target is not a JSON object, starting empty");
            Map::new()
        }
        Err(e) => {
            tracing::warn!(path = %target.display(), error = %e, "unreadable target, starting empty");
            Map::new()
        }
    }
}

fn read_json(path: &Path) -> std::result::Result<Value, FsError> {
    let content = io::read_text(path)?;
    serde_json::from_str(&content).map_err(|e| parse_error(path, e))
}

fn write_json(path: &Path, value: &Value) -> std::result::Result<(), FsError> {
    let mut content =
        serde_json::to_string_pretty(value).map_err(|e| FsError::ConfigSerialize {
            path: path.to_path_buf(),
            format: "JSON".into(),
            message: e.to_string(),
        })?;
    content.push('\n');
    io::write_text(path, &content)
}

fn parse_error(path: &Path, message: impl ToString) -> FsError {
    FsError::ConfigParse {
        path: path.to_path_buf(),
        format: "JSON".into(),
        message: message.to_string(),
    }
}

impl Default for FieldMerge {
    fn default() -> Self {
        Self::permissions()
    }
}

/// Merge the `"permissions"` key of `source` into `target`.
pub fn merge_permissions(source: &Path, target: &Path) -> Result<()> {
    FieldMerge::permissions().merge(source, target)
}
