//! Schema resolution and compilation errors.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to map a manifest onto a concrete schema document.
///
/// Variants fall into two classes. A missing or unknown `schema_version` is a
/// defect in the manifest. An unreadable index or a missing schema file is a
/// defect in the installation or configuration, reported separately by
/// [`SchemaResolutionError::is_environment_defect`].
#[derive(Error, Debug)]
pub enum SchemaResolutionError {
    /// The manifest has no usable `schema_version`.
    #[error("no 'schema_version' field found in manifest")]
    MissingVersion,

    /// The declared version has no entry in the schema index.
    #[error(
        "schema version '{version}' not found in schema index; available versions: {}",
        format_available(.available)
    )]
    UnknownSchemaVersion {
        /// Version declared by the manifest.
        version: String,
        /// Versions known to the index, excluding `latest`, sorted.
        available: Vec<String>,
    },

    /// The index document is absent or malformed.
    #[error("schema index {path} could not be read: {reason}")]
    SchemaIndexUnreadable {
        /// Location of the index.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// The index maps the version to a file that does not exist or cannot be
    /// loaded.
    #[error(
        "schema version '{version}' listed in index, but schema file not found: {path}; \
         this indicates a packaging or configuration error"
    )]
    SchemaFileMissing {
        /// Version declared by the manifest.
        version: String,
        /// Resolved schema location.
        path: PathBuf,
    },

    /// The resolved schema file exists but is not valid JSON.
    #[error("schema file {path} could not be loaded: {reason}")]
    SchemaUnreadable {
        /// Resolved schema location.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        "none found".to_string()
    } else {
        available.join(", ")
    }
}

impl SchemaResolutionError {
    /// True when the failure lies in the schema corpus rather than the
    /// manifest.
    pub fn is_environment_defect(&self) -> bool {
        matches!(
            self,
            Self::SchemaIndexUnreadable { .. }
                | Self::SchemaFileMissing { .. }
                | Self::SchemaUnreadable { .. }
        )
    }

    /// Diagnostic code used when reporting this failure.
    pub fn code(&self) -> &'static str {
        if self.is_environment_defect() {
            "schema-environment"
        } else {
            "schema-version"
        }
    }
}

/// A schema document could not be compiled into a validator.
#[derive(Error, Debug)]
pub enum SchemaValidationError {
    /// The schema is not a valid Draft 2020-12 document.
    #[error("failed to compile schema: {reason}")]
    ValidatorBuild {
        /// Compiler message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_version_lists_available() {
        let err = SchemaResolutionError::UnknownSchemaVersion {
            version: "9.9.9".to_string(),
            available: vec!["1.0.0".to_string(), "1.1.0".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("9.9.9"));
        assert!(msg.contains("1.0.0, 1.1.0"));
        assert!(!err.is_environment_defect());
        assert_eq!(err.code(), "schema-version");
    }

    #[test]
    fn unknown_version_with_empty_index() {
        let err = SchemaResolutionError::UnknownSchemaVersion {
            version: "1.0.0".to_string(),
            available: Vec::new(),
        };
        assert!(err.to_string().contains("none found"));
    }

    #[test]
    fn environment_defects_are_distinguished() {
        let missing = SchemaResolutionError::SchemaFileMissing {
            version: "1.0.0".to_string(),
            path: PathBuf::from("/schemas/v1_0_0/manifest.schema.json"),
        };
        assert!(missing.is_environment_defect());
        assert_eq!(missing.code(), "schema-environment");
        assert!(missing.to_string().contains("packaging or configuration"));

        let index = SchemaResolutionError::SchemaIndexUnreadable {
            path: PathBuf::from("/schemas/index.json"),
            reason: "not found".to_string(),
        };
        assert!(index.is_environment_defect());
        assert!(!SchemaResolutionError::MissingVersion.is_environment_defect());
    }
}
