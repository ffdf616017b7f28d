use labki_core::{is_semantic_version, DiagnosticItem, Level};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::registry::Validator;

/// Every pack must carry a `MAJOR.MINOR.PATCH` version.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackSemverValidator;

impl Validator for PackSemverValidator {
    fn name(&self) -> &'static str {
        "pack-semver"
    }

    fn code(&self) -> &'static str {
        "pack-semver"
    }

    fn default_level(&self) -> Level {
        Level::Error
    }

    fn description(&self) -> &'static str {
        "Pack must have semantic version"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError> {
        Ok(ctx
            .packs
            .iter()
            .filter(|(_, meta)| {
                !meta
                    .get("version")
                    .and_then(Value::as_str)
                    .is_some_and(is_semantic_version)
            })
            .map(|(pack_id, _)| {
                DiagnosticItem::new(
                    self.default_level(),
                    format!("Pack '{pack_id}' must have semantic version (MAJOR.MINOR.PATCH)"),
                )
                .with_code(self.code())
                .with_location(format!("packs/{pack_id}"))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::testing::{messages, run};
    use serde_json::json;
    use std::path::Path;

    #[test]
    fn valid_versions_pass() {
        let manifest = json!({"packs": {"a": {"version": "1.0.0"}, "b": {"version": "0.10.2"}}});
        assert!(run(&PackSemverValidator, &manifest, Path::new("manifest.yml")).is_empty());
    }

    #[test]
    fn invalid_or_missing_versions_fail() {
        let manifest = json!({"packs": {
            "a": {"version": "v1"},
            "b": {},
            "c": {"version": 1},
            "d": {"version": "1.0.0-rc1"}
        }});
        let items = run(&PackSemverValidator, &manifest, Path::new("manifest.yml"));
        assert_eq!(
            messages(&items),
            vec![
                "Pack 'a' must have semantic version (MAJOR.MINOR.PATCH)",
                "Pack 'b' must have semantic version (MAJOR.MINOR.PATCH)",
                "Pack 'c' must have semantic version (MAJOR.MINOR.PATCH)",
                "Pack 'd' must have semantic version (MAJOR.MINOR.PATCH)",
            ]
        );
    }
}
