//! # Schema Corpus
//!
//! The set of versioned manifest schemas plus the `index.json` document that
//! maps each `schema_version` to a schema file. The corpus location is always
//! injected by the caller: either a directory on disk or the bundle compiled
//! into this crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use labki_core::{parse_json_str, LoadError};

use crate::error::SchemaResolutionError;

/// File name of the index inside a corpus.
pub const INDEX_FILE: &str = "index.json";

/// Reserved index key that aliases the newest schema.
pub const LATEST_ALIAS: &str = "latest";

const EMBEDDED_ROOT: &str = "<embedded>";

/// Files compiled into the crate, keyed by path relative to the corpus root.
const EMBEDDED_FILES: &[(&str, &str)] = &[
    (INDEX_FILE, include_str!("../schemas/index.json")),
    (
        "v1_0_0/manifest.schema.json",
        include_str!("../schemas/v1_0_0/manifest.schema.json"),
    ),
];

/// Parsed `index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SchemaIndex {
    /// Manifest schema version (or `latest`) to relative schema path.
    #[serde(default)]
    pub manifest: BTreeMap<String, String>,
}

impl SchemaIndex {
    /// Concrete versions in the index, sorted, without the `latest` alias.
    pub fn versions(&self) -> Vec<String> {
        self.manifest
            .keys()
            .filter(|k| k.as_str() != LATEST_ALIAS)
            .cloned()
            .collect()
    }

    /// Relative schema path for an exact version key.
    pub fn lookup(&self, version: &str) -> Option<&str> {
        self.manifest.get(version).map(String::as_str)
    }
}

/// Where schema documents come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SchemaCorpus {
    /// A directory holding `index.json` and the schema files it names.
    Directory(PathBuf),
    /// The corpus bundled with this crate.
    #[default]
    Embedded,
}

impl SchemaCorpus {
    /// Corpus rooted at `dir`.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self::Directory(dir.into())
    }

    /// Root of the corpus, for display in diagnostics.
    pub fn root(&self) -> PathBuf {
        match self {
            Self::Directory(dir) => dir.clone(),
            Self::Embedded => PathBuf::from(EMBEDDED_ROOT),
        }
    }

    /// Location of a file inside the corpus.
    pub fn locate(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// True if the corpus holds a file at `relative`.
    pub fn contains(&self, relative: &str) -> bool {
        match self {
            Self::Directory(dir) => dir.join(relative).is_file(),
            Self::Embedded => embedded(relative).is_some(),
        }
    }

    /// Read and parse the index document.
    pub fn read_index(&self) -> Result<SchemaIndex, SchemaResolutionError> {
        let path = self.locate(INDEX_FILE);
        let unreadable = |reason: String| SchemaResolutionError::SchemaIndexUnreadable {
            path: path.clone(),
            reason,
        };
        let value = self.read_json(INDEX_FILE).map_err(|e| unreadable(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| unreadable(e.to_string()))
    }

    /// Load the schema document stored at `relative`.
    pub fn load_document(&self, version: &str, relative: &str) -> Result<Value, SchemaResolutionError> {
        let path = self.locate(relative);
        match self.read_json(relative) {
            Ok(value) => Ok(value),
            Err(LoadError::FileNotFound { .. }) => Err(SchemaResolutionError::SchemaFileMissing {
                version: version.to_string(),
                path,
            }),
            Err(e) => Err(SchemaResolutionError::SchemaUnreadable {
                path,
                reason: e.to_string(),
            }),
        }
    }

    fn read_json(&self, relative: &str) -> Result<Value, LoadError> {
        match self {
            Self::Directory(dir) => labki_core::load_json(&dir.join(relative)),
            Self::Embedded => {
                let path = self.locate(relative);
                let content = embedded(relative).ok_or_else(|| LoadError::FileNotFound {
                    path: path.clone(),
                })?;
                parse_json_str(content).map_err(|source| LoadError::JsonParse { path, source })
            }
        }
    }
}

fn embedded(relative: &str) -> Option<&'static str> {
    let wanted = Path::new(relative);
    EMBEDDED_FILES
        .iter()
        .find(|(name, _)| Path::new(name) == wanted)
        .map(|(_, content)| *content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_index_maps_1_0_0() {
        let index = SchemaCorpus::Embedded.read_index().unwrap();
        assert_eq!(index.lookup("1.0.0"), Some("v1_0_0/manifest.schema.json"));
        assert_eq!(index.lookup(LATEST_ALIAS), Some("v1_0_0/manifest.schema.json"));
        assert_eq!(index.versions(), vec!["1.0.0"]);
    }

    #[test]
    fn embedded_schema_is_draft_2020_12() {
        let schema = SchemaCorpus::Embedded
            .load_document("1.0.0", "v1_0_0/manifest.schema.json")
            .unwrap();
        assert_eq!(schema["$schema"], "https://json-schema.org/draft/2020-12/schema");
    }

    #[test]
    fn embedded_unknown_file_is_missing() {
        let err = SchemaCorpus::Embedded
            .load_document("2.0.0", "v2_0_0/manifest.schema.json")
            .unwrap_err();
        assert!(matches!(err, SchemaResolutionError::SchemaFileMissing { .. }));
    }

    #[test]
    fn directory_without_index_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let err = SchemaCorpus::directory(dir.path()).read_index().unwrap_err();
        assert!(matches!(err, SchemaResolutionError::SchemaIndexUnreadable { .. }));
        assert!(err.is_environment_defect());
    }

    #[test]
    fn directory_with_malformed_index_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INDEX_FILE), r#"{"manifest": ["1.0.0"]}"#).unwrap();
        let err = SchemaCorpus::directory(dir.path()).read_index().unwrap_err();
        assert!(matches!(err, SchemaResolutionError::SchemaIndexUnreadable { .. }));
    }

    #[test]
    fn directory_corpus_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("v1")).unwrap();
        std::fs::write(
            dir.path().join(INDEX_FILE),
            r#"{"manifest": {"1.0.0": "v1/m.json", "latest": "v1/m.json"}}"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("v1/m.json"), r#"{"type": "object"}"#).unwrap();

        let corpus = SchemaCorpus::directory(dir.path());
        assert!(corpus.contains("v1/m.json"));
        assert!(!corpus.contains("v1/other.json"));
        let schema = corpus.load_document("1.0.0", "v1/m.json").unwrap();
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn directory_schema_with_bad_json_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("m.json"), "{not json").unwrap();
        let err = SchemaCorpus::directory(dir.path())
            .load_document("1.0.0", "m.json")
            .unwrap_err();
        assert!(matches!(err, SchemaResolutionError::SchemaUnreadable { .. }));
        assert!(err.is_environment_defect());
    }
}
