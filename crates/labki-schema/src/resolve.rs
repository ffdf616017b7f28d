//! # Schema Resolution
//!
//! Maps a manifest's declared `schema_version` to a schema in the corpus.
//! Lookup is an exact match on the index key. There is no fallback to the
//! nearest major version and no use of the `latest` alias.
//!
//! An explicit `$schema` field is never dereferenced. It is reported back in
//! [`Resolution::ignored_override`] so the caller can warn about it, and
//! resolution proceeds by `schema_version` as usual.

use std::path::PathBuf;

use serde_json::Value;

use crate::corpus::SchemaCorpus;
use crate::error::SchemaResolutionError;

/// A schema selected for a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchema {
    /// The `schema_version` that selected this schema.
    pub version: String,
    /// Path of the schema relative to the corpus root.
    pub relative_path: String,
    /// Location of the schema, for display.
    pub location: PathBuf,
}

/// Outcome of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The selected schema.
    pub schema: ResolvedSchema,
    /// A non-blank `$schema` value found in the manifest and not honoured.
    pub ignored_override: Option<String>,
}

/// Resolves manifests against one schema corpus.
#[derive(Debug, Clone, Default)]
pub struct SchemaResolver {
    corpus: SchemaCorpus,
}

impl SchemaResolver {
    /// Create a resolver over `corpus`.
    pub fn new(corpus: SchemaCorpus) -> Self {
        Self { corpus }
    }

    /// The corpus this resolver reads from.
    pub fn corpus(&self) -> &SchemaCorpus {
        &self.corpus
    }

    /// Select the schema for `manifest`.
    pub fn resolve(&self, manifest: &Value) -> Result<Resolution, SchemaResolutionError> {
        let ignored_override = explicit_override(manifest);
        if let Some(uri) = &ignored_override {
            tracing::warn!(schema = %uri, "explicit $schema is not supported; resolving by schema_version");
        }

        let version = declared_version(manifest)?;
        let index = self.corpus.read_index()?;
        let relative_path = index
            .lookup(&version)
            .ok_or_else(|| SchemaResolutionError::UnknownSchemaVersion {
                version: version.clone(),
                available: index.versions(),
            })?
            .to_string();

        let location = self.corpus.locate(&relative_path);
        if !self.corpus.contains(&relative_path) {
            return Err(SchemaResolutionError::SchemaFileMissing {
                version,
                path: location,
            });
        }

        tracing::debug!(version = %version, schema = %location.display(), "resolved manifest schema");
        Ok(Resolution {
            schema: ResolvedSchema {
                version,
                relative_path,
                location,
            },
            ignored_override,
        })
    }

    /// Load the document for a resolved schema.
    pub fn load(&self, schema: &ResolvedSchema) -> Result<Value, SchemaResolutionError> {
        self.corpus
            .load_document(&schema.version, &schema.relative_path)
    }
}

fn explicit_override(manifest: &Value) -> Option<String> {
    manifest
        .get("$schema")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn declared_version(manifest: &Value) -> Result<String, SchemaResolutionError> {
    match manifest.get("schema_version") {
        None | Some(Value::Null) => Err(SchemaResolutionError::MissingVersion),
        Some(Value::String(s)) if s.is_empty() => Err(SchemaResolutionError::MissingVersion),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Ok(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn corpus_with(index: &str, files: &[&str]) -> (tempfile::TempDir, SchemaResolver) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.json"), index).unwrap();
        for file in files {
            let path = dir.path().join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, r#"{"type": "object"}"#).unwrap();
        }
        let resolver = SchemaResolver::new(SchemaCorpus::directory(dir.path()));
        (dir, resolver)
    }

    #[test]
    fn embedded_resolves_1_0_0() {
        let resolver = SchemaResolver::default();
        let resolution = resolver.resolve(&json!({"schema_version": "1.0.0"})).unwrap();
        assert_eq!(resolution.schema.version, "1.0.0");
        assert_eq!(resolution.schema.relative_path, "v1_0_0/manifest.schema.json");
        assert!(resolution.ignored_override.is_none());
        let schema = resolver.load(&resolution.schema).unwrap();
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn missing_version_fails() {
        let resolver = SchemaResolver::default();
        for manifest in [json!({}), json!({"schema_version": null}), json!({"schema_version": ""})] {
            let err = resolver.resolve(&manifest).unwrap_err();
            assert!(matches!(err, SchemaResolutionError::MissingVersion), "{manifest}");
        }
    }

    #[test]
    fn unknown_version_lists_known_versions_without_latest() {
        let (_dir, resolver) = corpus_with(
            r#"{"manifest": {"1.1.0": "b.json", "1.0.0": "a.json", "latest": "b.json"}}"#,
            &["a.json", "b.json"],
        );
        let err = resolver.resolve(&json!({"schema_version": "9.9.9"})).unwrap_err();
        match err {
            SchemaResolutionError::UnknownSchemaVersion { version, available } => {
                assert_eq!(version, "9.9.9");
                assert_eq!(available, vec!["1.0.0", "1.1.0"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn no_major_version_fallback() {
        let (_dir, resolver) = corpus_with(r#"{"manifest": {"1.0.0": "a.json"}}"#, &["a.json"]);
        let err = resolver.resolve(&json!({"schema_version": "1.0.1"})).unwrap_err();
        assert!(matches!(err, SchemaResolutionError::UnknownSchemaVersion { .. }));
    }

    #[test]
    fn latest_is_not_a_declarable_version_alias() {
        let (_dir, resolver) = corpus_with(r#"{"manifest": {"1.0.0": "a.json"}}"#, &["a.json"]);
        let err = resolver.resolve(&json!({"schema_version": "latest"})).unwrap_err();
        assert!(matches!(err, SchemaResolutionError::UnknownSchemaVersion { .. }));
    }

    #[test]
    fn indexed_but_missing_file_is_environment_defect() {
        let (_dir, resolver) = corpus_with(r#"{"manifest": {"1.0.0": "gone.json"}}"#, &[]);
        let err = resolver.resolve(&json!({"schema_version": "1.0.0"})).unwrap_err();
        assert!(matches!(err, SchemaResolutionError::SchemaFileMissing { .. }));
        assert!(err.is_environment_defect());
    }

    #[test]
    fn explicit_schema_is_reported_and_ignored() {
        let resolver = SchemaResolver::default();
        let resolution = resolver
            .resolve(&json!({"$schema": " ./custom.json ", "schema_version": "1.0.0"}))
            .unwrap();
        assert_eq!(resolution.ignored_override.as_deref(), Some("./custom.json"));
        assert_eq!(resolution.schema.version, "1.0.0");
    }

    #[test]
    fn blank_explicit_schema_is_not_an_override() {
        let resolver = SchemaResolver::default();
        let resolution = resolver
            .resolve(&json!({"$schema": "   ", "schema_version": "1.0.0"}))
            .unwrap();
        assert!(resolution.ignored_override.is_none());
    }
}
