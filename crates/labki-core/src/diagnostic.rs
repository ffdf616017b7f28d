//! # Diagnostic Model
//!
//! Leveled diagnostics accumulated across every check of a validation run.
//!
//! [`Diagnostics`] is an append-only, order-preserving sequence. Level
//! partitions are computed on demand and the exit code is derived solely from
//! the presence of error-level items. Identical items are never deduplicated:
//! two checks may report the same observation from different angles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fails the run.
    Error,
    /// Advisory; never affects the exit code.
    Warning,
    /// Informational; never affects the exit code.
    Info,
}

impl Level {
    /// Lowercase name as used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticItem {
    /// Severity.
    pub level: Level,
    /// Human-readable message.
    pub message: String,
    /// Stable machine-readable code of the check that produced the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Where in the manifest (or on disk) the item points.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl DiagnosticItem {
    /// Create an item with no code or location.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            code: None,
            location: None,
        }
    }

    /// Shorthand for an error-level item.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Shorthand for a warning-level item.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Shorthand for an info-level item.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    /// Attach a code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Attach a location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for DiagnosticItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Per-level counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of error-level items.
    pub errors: usize,
    /// Number of warning-level items.
    pub warnings: usize,
    /// Number of info-level items.
    pub infos: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s), {} warning(s), {} info(s)",
            self.errors, self.warnings, self.infos
        )
    }
}

/// Ordered collection of diagnostics for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Diagnostics {
    items: Vec<DiagnosticItem>,
}

impl Diagnostics {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one item.
    pub fn add(&mut self, item: DiagnosticItem) {
        self.items.push(item);
    }

    /// Append every item of `other`, preserving its order after ours.
    pub fn merge(&mut self, other: Diagnostics) {
        self.items.extend(other.items);
    }

    /// Error-level items in insertion order.
    pub fn errors(&self) -> Vec<&DiagnosticItem> {
        self.at_level(Level::Error)
    }

    /// Warning-level items in insertion order.
    pub fn warnings(&self) -> Vec<&DiagnosticItem> {
        self.at_level(Level::Warning)
    }

    /// Info-level items in insertion order.
    pub fn infos(&self) -> Vec<&DiagnosticItem> {
        self.at_level(Level::Info)
    }

    fn at_level(&self, level: Level) -> Vec<&DiagnosticItem> {
        self.items.iter().filter(|i| i.level == level).collect()
    }

    /// True if any error-level item exists.
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|i| i.level == Level::Error)
    }

    /// True if any warning-level item exists.
    pub fn has_warnings(&self) -> bool {
        self.items.iter().any(|i| i.level == Level::Warning)
    }

    /// Counts per level.
    pub fn summary(&self) -> Summary {
        self.items.iter().fold(Summary::default(), |mut s, item| {
            match item.level {
                Level::Error => s.errors += 1,
                Level::Warning => s.warnings += 1,
                Level::Info => s.infos += 1,
            }
            s
        })
    }

    /// `1` if any error-level item exists, else `0`.
    pub fn exit_code(&self) -> u8 {
        u8::from(self.has_errors())
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, DiagnosticItem> {
        self.items.iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if no items were recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build the serializable report used for JSON output.
    pub fn to_report(&self) -> Report {
        let summary = self.summary();
        Report {
            summary: ReportSummary {
                errors: summary.errors,
                warnings: summary.warnings,
                infos: summary.infos,
                exit_code: self.exit_code(),
            },
            items: self.items.clone(),
        }
    }
}

impl Extend<DiagnosticItem> for Diagnostics {
    fn extend<T: IntoIterator<Item = DiagnosticItem>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}

impl FromIterator<DiagnosticItem> for Diagnostics {
    fn from_iter<T: IntoIterator<Item = DiagnosticItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Diagnostics {
    type Item = DiagnosticItem;
    type IntoIter = std::vec::IntoIter<DiagnosticItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticItem;
    type IntoIter = std::slice::Iter<'a, DiagnosticItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Counts plus the derived exit code, as emitted in JSON reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of error-level items.
    pub errors: usize,
    /// Number of warning-level items.
    pub warnings: usize,
    /// Number of info-level items.
    pub infos: usize,
    /// `1` iff `errors > 0`.
    pub exit_code: u8,
}

/// Machine-readable validation report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Counts and exit code.
    pub summary: ReportSummary,
    /// Every item in insertion order.
    pub items: Vec<DiagnosticItem>,
}
