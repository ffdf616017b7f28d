//! # Manifest Model
//!
//! Typed view of a content-pack manifest. `pages` is keyed by page title and
//! `packs` by pack id; either defaults to empty when absent.
//!
//! Validators operate on the raw document returned by
//! [`load_manifest_document`] so that a manifest which does not fit these
//! types still yields diagnostics. The typed model serves callers that need
//! a well-formed manifest, such as the graph emitters.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LoadError, LoadResult};
use crate::loader::load_structured;
use crate::temporal::Timestamp;

fn default_schema_version() -> String {
    "1.0.0".to_string()
}

/// A page registered in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    /// Path of the page file, relative to the manifest directory.
    pub file: String,
    /// When the page content last changed.
    pub last_updated: Timestamp,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A versioned pack of pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackEntry {
    /// `MAJOR.MINOR.PATCH` version of the pack.
    pub version: String,
    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Titles of the pages owned by this pack.
    #[serde(default)]
    pub pages: Vec<String>,
    /// Ids of the packs this pack depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,
    /// Slugified tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The root manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Version of the schema the manifest is written against.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Display name of the pack repository.
    #[serde(default)]
    pub name: String,
    /// When the manifest last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<Timestamp>,
    /// Page registry keyed by title.
    #[serde(default)]
    pub pages: BTreeMap<String, PageEntry>,
    /// Pack registry keyed by id.
    #[serde(default)]
    pub packs: BTreeMap<String, PackEntry>,
}

impl Manifest {
    /// Convert a raw document into the typed model.
    pub fn from_value(value: Value) -> LoadResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Load and type a manifest from disk.
    pub fn load(path: &Path) -> LoadResult<Self> {
        Self::from_value(load_manifest_document(path)?)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

/// Load a manifest as a raw document, rejecting duplicate keys and any
/// top-level value that is not a mapping.
pub fn load_manifest_document(path: &Path) -> LoadResult<Value> {
    let value = load_structured(path)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(LoadError::NotAMapping {
            path: path.to_path_buf(),
            found: json_type_name(&value),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_registries_default_to_empty() {
        let m = Manifest::from_value(json!({"schema_version": "1.0.0", "name": "demo"})).unwrap();
        assert!(m.pages.is_empty());
        assert!(m.packs.is_empty());
        assert!(m.last_updated.is_none());
    }

    #[test]
    fn full_manifest_types() {
        let m = Manifest::from_value(json!({
            "schema_version": "1.0.0",
            "name": "demo",
            "last_updated": "2025-09-22T00:00:00Z",
            "pages": {
                "Template:Example": {"file": "pages/Templates/Example.wiki", "last_updated": "2025-09-22T00:00:00Z"}
            },
            "packs": {
                "core": {"version": "1.0.0", "pages": ["Template:Example"], "tags": ["base"]},
                "bundle": {"version": "1.0.0", "depends_on": ["core", "extra"]}
            }
        }))
        .unwrap();
        assert_eq!(m.pages["Template:Example"].file, "pages/Templates/Example.wiki");
        assert_eq!(m.packs["bundle"].depends_on, vec!["core", "extra"]);
        assert!(m.packs["bundle"].pages.is_empty());
        assert_eq!(m.packs["core"].pages, vec!["Template:Example"]);
    }

    #[test]
    fn wrong_shape_is_a_shape_error() {
        let err = Manifest::from_value(json!({"packs": {"a": {"version": 1}}})).unwrap_err();
        assert!(matches!(err, LoadError::Shape(_)));
    }

    #[test]
    fn top_level_list_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.yml");
        std::fs::write(&path, "- a\n- b\n").unwrap();
        let err = load_manifest_document(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { found: "array", .. }));
    }

    #[test]
    fn load_reads_yaml_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("manifest.yml");
        std::fs::write(
            &path,
            "schema_version: 1.0.0\nname: demo\npacks:\n  core:\n    version: 1.0.0\n    pages: []\n",
        )
        .unwrap();
        let m = Manifest::load(&path).unwrap();
        assert_eq!(m.schema_version, "1.0.0");
        assert_eq!(m.packs["core"].version, "1.0.0");
    }
}
