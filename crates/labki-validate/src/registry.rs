//! # Validator Registry
//!
//! Validators implement [`Validator`] and are collected into an explicit,
//! statically-known [`Registry`]. There is no global registration state:
//! [`default_registry`] lists every built-in check, and callers may build
//! their own registry from any subset plus custom validators.
//!
//! Each entry carries an inclusive schema-version range. Entries whose range
//! excludes the manifest's `schema_version` are skipped; a version that does
//! not parse as `MAJOR.MINOR.PATCH` runs every entry.

use std::fmt;

use labki_core::{DiagnosticItem, Level, SemanticVersion};

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::validators::{
    OrphanPageValidator, PackCycleValidator, PackDependencyValidator, PackPagesValidator,
    PackSemverValidator, PageFileValidator, SchemaConformanceValidator,
};

// ---------------------------------------------------------------------------
// Validator Trait
// ---------------------------------------------------------------------------

/// A single, independent manifest check.
///
/// Implementations must be pure functions of the context: no shared mutable
/// state, no writes. A validator that cannot complete returns `Err`, which
/// the orchestrator turns into an error diagnostic without aborting the run.
pub trait Validator: Send + Sync + fmt::Debug {
    /// Stable name used in failure diagnostics and logs.
    fn name(&self) -> &'static str;

    /// Diagnostic code attached to every item this validator emits.
    fn code(&self) -> &'static str;

    /// Level of this validator's primary findings.
    fn default_level(&self) -> Level;

    /// One-line description of what is checked.
    fn description(&self) -> &'static str;

    /// Run the check.
    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError>;
}

// ---------------------------------------------------------------------------
// Version Ranges
// ---------------------------------------------------------------------------

/// Inclusive range of schema versions a validator applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionRange {
    /// Lowest applicable version, if bounded.
    pub min: Option<SemanticVersion>,
    /// Highest applicable version, if bounded.
    pub max: Option<SemanticVersion>,
}

impl VersionRange {
    /// Range covering every version.
    pub const fn any() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Range from `min` upward.
    pub const fn at_least(min: SemanticVersion) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Range between `min` and `max`, both inclusive.
    pub const fn between(min: SemanticVersion, max: SemanticVersion) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// True if `version` falls inside the range. Unparseable versions always
    /// match.
    pub fn contains(&self, version: &str) -> bool {
        let Some(v) = SemanticVersion::parse(version) else {
            return true;
        };
        self.min.map_or(true, |min| v >= min) && self.max.map_or(true, |max| v <= max)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// A validator plus the schema versions it applies to.
#[derive(Debug)]
pub struct RegistryEntry {
    /// The check.
    pub validator: Box<dyn Validator>,
    /// Applicable schema versions.
    pub versions: VersionRange,
}

impl RegistryEntry {
    /// Entry applying to every schema version.
    pub fn new(validator: impl Validator + 'static) -> Self {
        Self {
            validator: Box::new(validator),
            versions: VersionRange::any(),
        }
    }

    /// Restrict the entry to `versions`.
    pub fn with_versions(mut self, versions: VersionRange) -> Self {
        self.versions = versions;
        self
    }

    /// True if the entry should run for `schema_version`.
    pub fn applies_to(&self, schema_version: &str) -> bool {
        self.versions.contains(schema_version)
    }
}

/// Ordered list of validators run by the orchestrator.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<RegistryEntry>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn register(&mut self, entry: RegistryEntry) -> &mut Self {
        self.entries.push(entry);
        self
    }

    /// Builder-style [`Registry::register`].
    pub fn with(mut self, entry: RegistryEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }

    /// Entries that apply to `schema_version`, in registration order.
    pub fn applicable<'a>(
        &'a self,
        schema_version: &'a str,
    ) -> impl Iterator<Item = &'a RegistryEntry> + 'a {
        self.entries.iter().filter(move |e| e.applies_to(schema_version))
    }

    /// Names of all registered validators.
    pub fn names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.validator.name()).collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every built-in validator, applicable to all schema versions.
pub fn default_registry() -> Registry {
    Registry::new()
        .with(RegistryEntry::new(SchemaConformanceValidator))
        .with(RegistryEntry::new(PageFileValidator))
        .with(RegistryEntry::new(OrphanPageValidator))
        .with(RegistryEntry::new(PackSemverValidator))
        .with(RegistryEntry::new(PackPagesValidator))
        .with(RegistryEntry::new(PackDependencyValidator))
        .with(RegistryEntry::new(PackCycleValidator))
}
