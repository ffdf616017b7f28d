#![deny(missing_docs)]

//! # labki-core: Foundational Types for Labki Content Packs
//!
//! Every other crate in the workspace depends on this one. It has no internal
//! crate dependencies, only `serde`, `serde_json`, `serde_yaml`, `thiserror`
//! and `chrono` from the external ecosystem.
//!
//! ## Contents
//!
//! 1. **Strict loading** ([`loader`]). YAML and JSON documents are parsed into
//!    a `serde_json::Value` and rejected when a mapping repeats a key at any
//!    depth. Two page definitions under one title must never silently merge.
//!
//! 2. **Structural primitives** ([`primitives`]). The `MAJOR.MINOR.PATCH`
//!    predicate, graph-safe identifier sanitation and namespace extraction.
//!
//! 3. **Diagnostic model** ([`diagnostic`]). Leveled, order-preserving
//!    diagnostics with a derived exit code.
//!
//! 4. **Manifest model** ([`manifest`]). Typed `Manifest` / `PageEntry` /
//!    `PackEntry` for callers that want a strongly-typed view. Validators work
//!    on the raw document so that malformed manifests still produce
//!    diagnostics.

pub mod diagnostic;
pub mod error;
pub mod loader;
pub mod manifest;
pub mod primitives;
pub mod temporal;

pub use diagnostic::{DiagnosticItem, Diagnostics, Level, Report, ReportSummary, Summary};
pub use error::{LoadError, LoadResult};
pub use loader::{load_json, load_structured, load_yaml, parse_json_str, parse_yaml_str, StrictValue};
pub use manifest::{load_manifest_document, Manifest, PackEntry, PageEntry};
pub use primitives::{is_semantic_version, namespace_of, sanitize_graph_id, SemanticVersion};
pub use temporal::Timestamp;
