use std::collections::HashMap;

use labki_core::{DiagnosticItem, Level};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::registry::Validator;

/// Cross-checks pack `pages` lists against the page registry.
///
/// A title must exist in `pages` and may be claimed by at most one pack. The
/// first pack to list a title owns it; every later claimant is reported
/// together with the owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackPagesValidator;

impl PackPagesValidator {
    fn item(&self, pack_id: &str, message: String) -> DiagnosticItem {
        DiagnosticItem::new(self.default_level(), message)
            .with_code(self.code())
            .with_location(format!("packs/{pack_id}"))
    }
}

impl Validator for PackPagesValidator {
    fn name(&self) -> &'static str {
        "pack-pages"
    }

    fn code(&self) -> &'static str {
        "pack-pages"
    }

    fn default_level(&self) -> Level {
        Level::Error
    }

    fn description(&self) -> &'static str {
        "Pages referenced in packs must be valid"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError> {
        let mut items = Vec::new();
        let mut owner: HashMap<&str, &str> = HashMap::new();

        for (pack_id, meta) in ctx.packs {
            let titles = match meta.get("pages") {
                None | Some(Value::Null) => continue,
                Some(Value::Array(titles)) => titles,
                Some(_) => {
                    items.push(self.item(pack_id, format!("Pack '{pack_id}' pages must be an array")));
                    continue;
                }
            };

            for entry in titles {
                let Some(title) = entry.as_str() else {
                    items.push(self.item(
                        pack_id,
                        format!("Pack '{pack_id}' references unknown page title: {entry}"),
                    ));
                    continue;
                };
                if !ctx.pages.contains_key(title) {
                    items.push(self.item(
                        pack_id,
                        format!("Pack '{pack_id}' references unknown page title: {title}"),
                    ));
                    continue;
                }
                match owner.get(title) {
                    Some(&other) if other != pack_id.as_str() => {
                        items.push(self.item(
                            pack_id,
                            format!(
                                "Page title '{title}' included in multiple packs ('{other}' and '{pack_id}'). \
                                 Move to a shared dependency pack."
                            ),
                        ));
                    }
                    Some(_) => {}
                    None => {
                        owner.insert(title, pack_id.as_str());
                    }
                }
            }
        }
        Ok(items)
    }
}
