use labki_core::{DiagnosticItem, Level};

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::graph::DependencyGraph;
use crate::registry::Validator;

/// Packs must not form dependency cycles.
///
/// Reports a single aggregate error when Kahn's algorithm cannot order every
/// pack; the packs on the cycle are not enumerated.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackCycleValidator;

impl Validator for PackCycleValidator {
    fn name(&self) -> &'static str {
        "pack-cycle"
    }

    fn code(&self) -> &'static str {
        "pack-cycles"
    }

    fn default_level(&self) -> Level {
        Level::Error
    }

    fn description(&self) -> &'static str {
        "Packs must not form dependency cycles"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError> {
        if ctx.packs.is_empty() || !DependencyGraph::from_packs(ctx.packs).has_cycle() {
            return Ok(Vec::new());
        }
        Ok(vec![DiagnosticItem::new(
            self.default_level(),
            "Dependency cycle detected among packs",
        )
        .with_code(self.code())
        .with_location("packs")])
    }
}
