//! # labki-graph
//!
//! Visual and machine-readable views of a content-pack manifest: packs,
//! pages, `depends_on` edges (dependency to dependent) and inclusion edges
//! (page to owning pack).
//!
//! | Format    | Output                                                  |
//! |-----------|---------------------------------------------------------|
//! | `dot`     | Graphviz `digraph Manifest` with pack and page clusters |
//! | `mermaid` | Mermaid `graph LR` with class and link styles           |
//! | `json`    | `{"nodes": [..], "edges": [..], "meta": {..}}`          |
//!
//! Packs are coloured by [`PackKind`], pages by namespace. Graph output is
//! informational only; it performs no validation.

#![deny(missing_docs)]

pub mod dot;
pub mod error;
pub mod json;
pub mod mermaid;
pub mod model;
pub mod style;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use labki_core::Manifest;

pub use dot::emit_dot;
pub use error::{GraphError, GraphResult};
pub use json::{emit_json, emit_json_at};
pub use mermaid::emit_mermaid;
pub use model::{categorize_packs, extract_graph, page_namespace, ManifestGraph, PackKind};

/// Output format of a rendered graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GraphFormat {
    /// Graphviz DOT.
    #[default]
    Dot,
    /// Mermaid flowchart.
    Mermaid,
    /// JSON nodes and edges.
    Json,
}

impl GraphFormat {
    /// Lowercase format name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Mermaid => "mermaid",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphFormat {
    type Err = GraphError;

    /// Case-insensitive parse of `dot`, `mermaid` or `json`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "mermaid" => Ok(Self::Mermaid),
            "json" => Ok(Self::Json),
            _ => Err(GraphError::UnsupportedFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Render `manifest` in `format`.
pub fn render(manifest: &Manifest, format: GraphFormat) -> GraphResult<String> {
    let graph = extract_graph(manifest);
    match format {
        GraphFormat::Dot => Ok(emit_dot(&graph)),
        GraphFormat::Mermaid => Ok(emit_mermaid(&graph)),
        GraphFormat::Json => emit_json(&graph),
    }
}

/// Load the manifest at `path` and render it in `format`.
pub fn render_file(path: &Path, format: GraphFormat) -> GraphResult<String> {
    let manifest = Manifest::load(path)?;
    render(&manifest, format)
}
