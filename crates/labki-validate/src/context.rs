//! Inputs shared by every validator for one run.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde_json::{Map, Value};

fn empty_map() -> &'static Map<String, Value> {
    static EMPTY: OnceLock<Map<String, Value>> = OnceLock::new();
    EMPTY.get_or_init(Map::new)
}

/// Read-only view of a loaded manifest and its resolved schema.
///
/// `pages` and `packs` fall back to an empty mapping when absent or not a
/// mapping, so validators never need to re-check the registry shape; the
/// schema conformance check reports the wrong type.
#[derive(Debug, Clone, Copy)]
pub struct ValidationContext<'a> {
    /// The raw manifest document.
    pub manifest: &'a Value,
    /// Page registry keyed by title.
    pub pages: &'a Map<String, Value>,
    /// Pack registry keyed by id.
    pub packs: &'a Map<String, Value>,
    /// The resolved JSON Schema document.
    pub schema: &'a Value,
    /// Path the manifest was loaded from.
    pub manifest_path: &'a Path,
}

impl<'a> ValidationContext<'a> {
    /// Build a context, extracting the registries from `manifest`.
    pub fn new(manifest: &'a Value, schema: &'a Value, manifest_path: &'a Path) -> Self {
        let registry = |key: &str| {
            manifest
                .get(key)
                .and_then(Value::as_object)
                .unwrap_or_else(|| empty_map())
        };
        Self {
            manifest,
            pages: registry("pages"),
            packs: registry("packs"),
            schema,
            manifest_path,
        }
    }

    /// Declared `schema_version`, or `0.0.0` when absent.
    pub fn schema_version(&self) -> String {
        match self.manifest.get("schema_version") {
            Some(Value::String(s)) => s.clone(),
            None | Some(Value::Null) => "0.0.0".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Directory page `file` paths are relative to.
    pub fn manifest_dir(&self) -> PathBuf {
        match self.manifest_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Absolute-or-relative location of a manifest-relative file path.
    pub fn resolve_file(&self, relative: &str) -> PathBuf {
        self.manifest_dir().join(relative)
    }
}
