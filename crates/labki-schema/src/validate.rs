//! # Schema Conformance
//!
//! Runs a manifest against its resolved JSON Schema (Draft 2020-12) and
//! returns every violation with structured context. Violations are sorted
//! by instance path so that output is stable across runs; violations at the
//! same path keep the order the validator produced them in.

use std::fmt;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::SchemaValidationError;

/// One step of a JSON pointer into the manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathSegment {
    /// Array index.
    Index(usize),
    /// Object key.
    Key(String),
}

impl PathSegment {
    /// The key, if this segment is an object key.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Key(k) => Some(k),
            Self::Index(_) => None,
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
        }
    }
}

/// Split a JSON pointer into unescaped segments.
///
/// All-digit segments are read as array indices. The distinction only
/// affects ordering; hint matching looks at keys.
pub fn parse_pointer(pointer: &str) -> Vec<PathSegment> {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .strip_prefix('/')
        .unwrap_or(pointer)
        .split('/')
        .map(|raw| {
            let unescaped = raw.replace("~1", "/").replace("~0", "~");
            match unescaped.parse::<usize>() {
                Ok(i) if !unescaped.is_empty() && unescaped.bytes().all(|b| b.is_ascii_digit()) => {
                    PathSegment::Index(i)
                }
                _ => PathSegment::Key(unescaped),
            }
        })
        .collect()
}

/// A single schema violation with structured context.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// JSON pointer to the offending value in the manifest; empty for root.
    pub instance_path: String,
    /// Parsed form of `instance_path`.
    pub path: Vec<PathSegment>,
    /// JSON pointer into the schema that triggered the violation.
    pub schema_path: String,
    /// The failing schema keyword, e.g. `pattern` or `anyOf`.
    pub keyword: String,
    /// Validator message.
    pub message: String,
    /// The offending value.
    pub instance: Value,
}

impl Violation {
    /// Key at `index` of the instance path, if it is an object key.
    pub fn key_at(&self, index: usize) -> Option<&str> {
        self.path.get(index).and_then(PathSegment::as_key)
    }

    /// True if the failing schema node sits under `keyword` anywhere along
    /// the schema path.
    pub fn under_keyword(&self, keyword: &str) -> bool {
        self.schema_path.split('/').any(|s| s == keyword)
    }

    /// Instance path for display, with `(root)` for the document itself.
    pub fn display_path(&self) -> &str {
        if self.instance_path.is_empty() {
            "(root)"
        } else {
            &self.instance_path
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at path {}", self.message, self.display_path())
    }
}

/// A compiled schema ready to check manifests.
pub struct ConformanceChecker {
    validator: Validator,
}

impl fmt::Debug for ConformanceChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConformanceChecker").finish_non_exhaustive()
    }
}

impl ConformanceChecker {
    /// Compile `schema` as Draft 2020-12.
    pub fn compile(schema: &Value) -> Result<Self, SchemaValidationError> {
        let validator = jsonschema::options()
            .with_draft(jsonschema::Draft::Draft202012)
            .build(schema)
            .map_err(|e| SchemaValidationError::ValidatorBuild {
                reason: e.to_string(),
            })?;
        Ok(Self { validator })
    }

    /// All violations of `instance`, sorted by instance path.
    pub fn violations(&self, instance: &Value) -> Vec<Violation> {
        let mut violations: Vec<Violation> = self
            .validator
            .iter_errors(instance)
            .map(|e| {
                let instance_path = e.instance_path.to_string();
                let schema_path = e.schema_path.to_string();
                let keyword = schema_path
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_string();
                Violation {
                    path: parse_pointer(&instance_path),
                    instance_path,
                    schema_path,
                    keyword,
                    message: e.to_string(),
                    instance: e.instance.clone().into_owned(),
                }
            })
            .collect();
        violations.sort_by(|a, b| a.path.cmp(&b.path));
        violations
    }

    /// True if `instance` has no violations.
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }
}

/// Compile `schema` and check `instance` in one step.
pub fn check_conformance(
    schema: &Value,
    instance: &Value,
) -> Result<Vec<Violation>, SchemaValidationError> {
    Ok(ConformanceChecker::compile(schema)?.violations(instance))
}
