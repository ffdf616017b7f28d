//! # labki-validate: Manifest Validation Engine
//!
//! Determines whether a content-pack manifest is internally consistent and
//! physically satisfiable before it is published.
//!
//! ## Pipeline
//!
//! ```text
//! manifest bytes ─▶ strict load ─▶ schema resolution ─▶ validators ─▶ Diagnostics ─▶ exit code
//! ```
//!
//! [`RepoValidator`] (or the [`validate_repo`] shorthand) runs the pipeline.
//! Validators are independent, read-only checks collected in an explicit
//! [`Registry`]; [`default_registry`] holds the built-in set:
//!
//! | Validator                    | Code                | Level   |
//! |------------------------------|---------------------|---------|
//! | [`SchemaConformanceValidator`] | `schema-validation` | error   |
//! | [`PageFileValidator`]        | `page-file`         | error / warning |
//! | [`OrphanPageValidator`]      | `page-orphan`       | warning |
//! | [`PackSemverValidator`]      | `pack-semver`       | error   |
//! | [`PackPagesValidator`]       | `pack-pages`        | error   |
//! | [`PackDependencyValidator`]  | `pack-deps`         | error   |
//! | [`PackCycleValidator`]       | `pack-cycles`       | error   |
//!
//! Diagnostics from different validators are concatenated in registry order
//! and never deduplicated.

pub mod context;
pub mod error;
pub mod graph;
pub mod registry;
pub mod repo;
pub mod validators;

pub use context::ValidationContext;
pub use error::ValidatorError;
pub use graph::DependencyGraph;
pub use registry::{default_registry, Registry, RegistryEntry, Validator, VersionRange};
pub use repo::{
    validate_repo, RepoValidator, MANIFEST_LOAD_CODE, SCHEMA_OVERRIDE_CODE, VALIDATOR_SKIPPED_CODE,
};
pub use validators::{
    OrphanPageValidator, PackCycleValidator, PackDependencyValidator, PackPagesValidator,
    PackSemverValidator, PageFileValidator, SchemaConformanceValidator,
};
