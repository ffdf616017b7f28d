use std::path::Path;

use labki_core::{namespace_of, DiagnosticItem, Level};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::registry::Validator;

/// Checks that every page's `file` exists relative to the manifest.
///
/// Titles without a namespace prefix get an advisory. `Module:` pages also
/// get naming-convention advisories: the file should be a `.lua` file under a
/// `Modules` directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageFileValidator;

impl PageFileValidator {
    fn item(&self, level: Level, title: &str, message: String) -> DiagnosticItem {
        DiagnosticItem::new(level, message)
            .with_code(self.code())
            .with_location(format!("pages/{title}"))
    }
}

impl Validator for PageFileValidator {
    fn name(&self) -> &'static str {
        "page-file"
    }

    fn code(&self) -> &'static str {
        "page-file"
    }

    fn default_level(&self) -> Level {
        Level::Error
    }

    fn description(&self) -> &'static str {
        "Validate page file presence and module placement"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError> {
        let mut items = Vec::new();
        for (title, meta) in ctx.pages {
            if namespace_of(title).is_none() {
                items.push(self.item(
                    Level::Warning,
                    title,
                    format!("Title missing namespace: {title}"),
                ));
            }

            let file = match meta.get("file").and_then(Value::as_str) {
                Some(f) if !f.is_empty() => f,
                _ => {
                    items.push(self.item(
                        Level::Error,
                        title,
                        format!("Page '{title}' is missing a 'file' path"),
                    ));
                    continue;
                }
            };

            if !ctx.resolve_file(file).exists() {
                items.push(self.item(
                    Level::Error,
                    title,
                    format!("Page file not found: {file} (for {title})"),
                ));
            }

            if namespace_of(title) == Some("Module") {
                let normalized = file.replace('\\', "/");
                if Path::new(&normalized).extension().and_then(|e| e.to_str()) != Some("lua") {
                    items.push(self.item(
                        Level::Warning,
                        title,
                        format!("Module files should use .lua extension: {file}"),
                    ));
                }
                if !normalized.split('/').any(|segment| segment == "Modules") {
                    items.push(self.item(
                        Level::Warning,
                        title,
                        format!("Module files should be under pages/Modules/: {file}"),
                    ));
                }
            }
        }
        Ok(items)
    }
}
