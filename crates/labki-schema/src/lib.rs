//! # labki-schema: Schema Resolution & Conformance
//!
//! Owns the versioned manifest schemas and everything needed to check a
//! manifest against the right one.
//!
//! ## Corpus (`corpus`)
//!
//! A [`SchemaCorpus`] is either a directory on disk or the v1.0.0 bundle
//! compiled into this crate. Its `index.json` maps each `schema_version` (and
//! the reserved `latest` alias) to a schema file.
//!
//! ## Resolution (`resolve`)
//!
//! [`SchemaResolver::resolve`] selects a schema by exact `schema_version`
//! match. Failures are split into manifest defects and environment defects
//! so reports can tell "the manifest is broken" apart from "this install is
//! missing a schema".
//!
//! ## Conformance (`validate`, `hints`)
//!
//! [`ConformanceChecker`] compiles a schema once and returns every
//! [`Violation`] sorted by instance path. [`hints_for`] turns the common
//! violation shapes into author-facing messages.
//!
//! ## Crate Policy
//!
//! - Depends only on `labki-core` internally.
//! - Schema URIs are never dereferenced over the network.

pub mod corpus;
pub mod error;
pub mod hints;
pub mod resolve;
pub mod validate;

pub use corpus::{SchemaCorpus, SchemaIndex, INDEX_FILE, LATEST_ALIAS};
pub use error::{SchemaResolutionError, SchemaValidationError};
pub use hints::hints_for;
pub use resolve::{Resolution, ResolvedSchema, SchemaResolver};
pub use validate::{check_conformance, parse_pointer, ConformanceChecker, PathSegment, Violation};
