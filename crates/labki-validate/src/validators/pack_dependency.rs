use labki_core::{DiagnosticItem, Level};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::registry::Validator;

/// Every `depends_on` entry must name a declared pack.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackDependencyValidator;

impl Validator for PackDependencyValidator {
    fn name(&self) -> &'static str {
        "pack-dependency"
    }

    fn code(&self) -> &'static str {
        "pack-deps"
    }

    fn default_level(&self) -> Level {
        Level::Error
    }

    fn description(&self) -> &'static str {
        "All pack dependencies must reference valid pack IDs"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError> {
        let mut items = Vec::new();
        for (pack_id, meta) in ctx.packs {
            let Some(deps) = meta.get("depends_on").and_then(Value::as_array) else {
                continue;
            };
            for dep in deps {
                let known = dep.as_str().is_some_and(|d| ctx.packs.contains_key(d));
                if !known {
                    let shown = dep.as_str().map_or_else(|| dep.to_string(), str::to_string);
                    items.push(
                        DiagnosticItem::new(
                            self.default_level(),
                            format!("Pack '{pack_id}' depends_on unknown pack id: {shown}"),
                        )
                        .with_code(self.code())
                        .with_location(format!("packs/{pack_id}")),
                    );
                }
            }
        }
        Ok(items)
    }
}
