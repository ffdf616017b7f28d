//! # Repository Validator
//!
//! Drives one validation run: load the manifest, resolve and load its
//! schema, then run every applicable validator and merge the results.
//!
//! A manifest that cannot be loaded, or whose schema cannot be resolved,
//! short-circuits with a single error diagnostic. Past that point the run
//! always completes: a validator that returns `Err` or panics becomes one
//! error diagnostic naming it, and the remaining validators still run.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use labki_core::{load_manifest_document, DiagnosticItem, Diagnostics};
use labki_schema::{SchemaCorpus, SchemaResolver};

use crate::context::ValidationContext;
use crate::registry::{default_registry, Registry, RegistryEntry};

/// Code for a manifest that could not be read or parsed.
pub const MANIFEST_LOAD_CODE: &str = "manifest-load";

/// Code for an explicit `$schema` that was ignored.
pub const SCHEMA_OVERRIDE_CODE: &str = "schema-override-ignored";

/// Code for a validator that was not run for this schema version.
pub const VALIDATOR_SKIPPED_CODE: &str = "validator-skipped";

/// Validates manifests against a schema corpus with a set of validators.
#[derive(Debug)]
pub struct RepoValidator {
    resolver: SchemaResolver,
    registry: Registry,
}

impl Default for RepoValidator {
    fn default() -> Self {
        Self::new(SchemaCorpus::default())
    }
}

impl RepoValidator {
    /// Validator over `corpus` with every built-in check.
    pub fn new(corpus: SchemaCorpus) -> Self {
        Self {
            resolver: SchemaResolver::new(corpus),
            registry: default_registry(),
        }
    }

    /// Replace the validator registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// The validators this instance runs.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Validate the manifest at `manifest_path`.
    ///
    /// Returns the exit code (`1` iff any error-level diagnostic exists) and
    /// every diagnostic produced.
    pub fn validate(&self, manifest_path: &Path) -> (u8, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        let manifest = match load_manifest_document(manifest_path) {
            Ok(m) => m,
            Err(e) => {
                diagnostics.add(
                    DiagnosticItem::error(format!("Failed to read manifest: {e}"))
                        .with_code(MANIFEST_LOAD_CODE),
                );
                return (diagnostics.exit_code(), diagnostics);
            }
        };

        let resolution = match self.resolver.resolve(&manifest) {
            Ok(r) => r,
            Err(e) => {
                diagnostics.add(
                    DiagnosticItem::error(format!("Failed to resolve schema: {e}")).with_code(e.code()),
                );
                return (diagnostics.exit_code(), diagnostics);
            }
        };
        let schema = match self.resolver.load(&resolution.schema) {
            Ok(s) => s,
            Err(e) => {
                diagnostics.add(
                    DiagnosticItem::error(format!("Failed to resolve schema: {e}")).with_code(e.code()),
                );
                return (diagnostics.exit_code(), diagnostics);
            }
        };

        if let Some(uri) = &resolution.ignored_override {
            diagnostics.add(
                DiagnosticItem::warning(format!(
                    "Explicit $schema URIs are not supported; ignoring '{uri}' and validating against schema_version {}",
                    resolution.schema.version
                ))
                .with_code(SCHEMA_OVERRIDE_CODE)
                .with_location("$schema"),
            );
        }

        let ctx = ValidationContext::new(&manifest, &schema, manifest_path);
        let schema_version = ctx.schema_version();
        for entry in self.registry.entries() {
            if entry.applies_to(&schema_version) {
                diagnostics.extend(run_entry(entry, &ctx));
            } else {
                diagnostics.add(
                    DiagnosticItem::info(format!(
                        "Validator {} skipped: not applicable to schema_version {schema_version}",
                        entry.validator.name()
                    ))
                    .with_code(VALIDATOR_SKIPPED_CODE),
                );
            }
        }

        (diagnostics.exit_code(), diagnostics)
    }
}

fn run_entry(entry: &RegistryEntry, ctx: &ValidationContext<'_>) -> Vec<DiagnosticItem> {
    let validator = entry.validator.as_ref();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| validator.validate(ctx)));
    let failure = match outcome {
        Ok(Ok(items)) => {
            tracing::debug!(validator = validator.name(), items = items.len(), "validator finished");
            return items;
        }
        Ok(Err(e)) => e.to_string(),
        Err(payload) => panic_message(payload.as_ref()),
    };
    tracing::error!(validator = validator.name(), error = %failure, "validator failed");
    vec![
        DiagnosticItem::error(format!("Validator {} failed: {failure}", validator.name()))
            .with_code(validator.code()),
    ]
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "validator panicked".to_string()
    }
}

/// Validate `manifest_path` against the embedded schema corpus with every
/// built-in validator.
pub fn validate_repo(manifest_path: &Path) -> (u8, Diagnostics) {
    RepoValidator::default().validate(manifest_path)
}
