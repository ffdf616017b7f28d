//! # Error Hierarchy
//!
//! Structured load errors built with `thiserror`. Every variant carries the
//! path of the document that failed so that operators can locate the defect
//! without re-running under a debugger.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a structured document from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The document does not exist.
    #[error("required file not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The document exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// YAML parsing failed, including duplicate mapping keys.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        /// Path of the YAML document.
        path: PathBuf,
        /// Parser error with line/column information.
        source: serde_yaml::Error,
    },

    /// JSON parsing failed, including duplicate object keys.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        /// Path of the JSON document.
        path: PathBuf,
        /// Parser error with line/column information.
        source: serde_json::Error,
    },

    /// The top-level document is not a mapping.
    #[error("{path}: top-level document must be a mapping, found {found}")]
    NotAMapping {
        /// Path of the document.
        path: PathBuf,
        /// JSON type name of what was found instead.
        found: &'static str,
    },

    /// The document parsed but does not fit the typed manifest model.
    #[error("manifest does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Result alias for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display() {
        let err = LoadError::FileNotFound {
            path: PathBuf::from("/tmp/missing/manifest.yml"),
        };
        assert!(format!("{err}").contains("/tmp/missing/manifest.yml"));
    }

    #[test]
    fn not_a_mapping_display() {
        let err = LoadError::NotAMapping {
            path: PathBuf::from("manifest.yml"),
            found: "array",
        };
        let msg = format!("{err}");
        assert!(msg.contains("manifest.yml"));
        assert!(msg.contains("array"));
    }

    #[test]
    fn io_error_keeps_source() {
        let err = LoadError::Io {
            path: PathBuf::from("pages"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied"),
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(format!("{err}").contains("access denied"));
    }

    #[test]
    fn shape_error_from_serde_json() {
        let inner = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let err = LoadError::from(inner);
        assert!(format!("{err}").contains("expected shape"));
    }
}
