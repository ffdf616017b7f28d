//! Errors raised while building or rendering a manifest graph.

use labki_core::LoadError;
use thiserror::Error;

/// Failure to produce a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The manifest could not be read or does not fit the manifest model.
    #[error("failed to read manifest for graph generation: {0}")]
    Manifest(#[from] LoadError),

    /// The requested output format is not one of `dot`, `mermaid`, `json`.
    #[error("unsupported graph format '{format}'; supported: dot, mermaid, json")]
    UnsupportedFormat {
        /// The format as given.
        format: String,
    },

    /// JSON rendering failed.
    #[error("failed to render JSON graph: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
