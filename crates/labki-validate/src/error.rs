//! Internal validator failures.
//!
//! These never reach the caller as `Err`: the orchestrator converts each one
//! into an error diagnostic naming the failing validator.

use std::path::PathBuf;

use labki_schema::SchemaValidationError;
use thiserror::Error;

/// A validator could not complete its check.
#[derive(Error, Debug)]
pub enum ValidatorError {
    /// The resolved schema could not be compiled.
    #[error(transparent)]
    Schema(#[from] SchemaValidationError),

    /// A filesystem location needed by the check could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Location that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Any other unexpected condition.
    #[error("{0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_display_names_path() {
        let err = ValidatorError::Io {
            path: PathBuf::from("/repo/pages"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/repo/pages"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn schema_error_is_transparent() {
        let err = ValidatorError::from(SchemaValidationError::ValidatorBuild {
            reason: "bad keyword".to_string(),
        });
        assert_eq!(err.to_string(), "failed to compile schema: bad keyword");
    }
}
