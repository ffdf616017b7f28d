//! # Structural Primitives
//!
//! Small, pure predicates and transforms shared by every validator and by the
//! graph emitters.

use std::fmt;
use std::str::FromStr;

/// Returns true iff `s` is exactly `MAJOR.MINOR.PATCH` with ASCII digits.
///
/// No pre-release or build metadata is accepted, and no surrounding
/// whitespace is trimmed.
pub fn is_semantic_version(s: &str) -> bool {
    let mut parts = 0;
    for part in s.split('.') {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        parts += 1;
    }
    parts == 3
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
///
/// Only used for node identifiers in rendered graphs, never for identity.
pub fn sanitize_graph_id(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Namespace prefix of a page title, e.g. `Template` for `Template:Example`.
///
/// Returns `None` for titles without a colon.
pub fn namespace_of(title: &str) -> Option<&str> {
    title.split_once(':').map(|(ns, _)| ns)
}

/// A parsed `MAJOR.MINOR.PATCH` version, ordered numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SemanticVersion {
    /// Major component.
    pub major: u64,
    /// Minor component.
    pub minor: u64,
    /// Patch component.
    pub patch: u64,
}

impl SemanticVersion {
    /// Construct from components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, returning `None` unless it passes
    /// [`is_semantic_version`] and every component fits in a `u64`.
    pub fn parse(s: &str) -> Option<Self> {
        if !is_semantic_version(s) {
            return None;
        }
        let mut it = s.split('.').map(u64::from_str);
        match (it.next(), it.next(), it.next()) {
            (Some(Ok(major)), Some(Ok(minor)), Some(Ok(patch))) => {
                Some(Self::new(major, minor, patch))
            }
            _ => None,
        }
    }
}

impl FromStr for SemanticVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("not a MAJOR.MINOR.PATCH version: {s:?}"))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
