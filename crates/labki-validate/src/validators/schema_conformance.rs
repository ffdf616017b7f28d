use labki_core::{DiagnosticItem, Level};
use labki_schema::{check_conformance, hints_for};

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::registry::Validator;

/// Checks the manifest against its resolved JSON Schema.
///
/// Each violation yields any matching hints followed by the raw validator
/// message with its path, so the precise cause is always visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaConformanceValidator;

impl Validator for SchemaConformanceValidator {
    fn name(&self) -> &'static str {
        "schema-conformance"
    }

    fn code(&self) -> &'static str {
        "schema-validation"
    }

    fn default_level(&self) -> Level {
        Level::Error
    }

    fn description(&self) -> &'static str {
        "Manifest must satisfy the declared schema"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError> {
        let mut items = Vec::new();
        for violation in check_conformance(ctx.schema, ctx.manifest)? {
            let location = violation.display_path().to_string();
            for hint in hints_for(&violation) {
                items.push(
                    DiagnosticItem::new(self.default_level(), format!("Schema validation: {hint}"))
                        .with_code(self.code())
                        .with_location(location.clone()),
                );
            }
            items.push(
                DiagnosticItem::new(self.default_level(), format!("Schema validation: {violation}"))
                    .with_code(self.code())
                    .with_location(location),
            );
        }
        Ok(items)
    }
}
