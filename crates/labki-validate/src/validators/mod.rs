//! Built-in validators.
//!
//! Every validator reads the raw manifest through a
//! [`ValidationContext`](crate::ValidationContext) and tolerates malformed
//! entries: a value of the wrong shape is skipped or reported, never a
//! reason to fail the whole check.

mod orphan_page;
mod pack_cycle;
mod pack_dependency;
mod pack_pages;
mod pack_semver;
mod page_file;
mod schema_conformance;

pub use orphan_page::OrphanPageValidator;
pub use pack_cycle::PackCycleValidator;
pub use pack_dependency::PackDependencyValidator;
pub use pack_pages::PackPagesValidator;
pub use pack_semver::PackSemverValidator;
pub use page_file::PageFileValidator;
pub use schema_conformance::SchemaConformanceValidator;

#[cfg(test)]
pub(crate) mod testing {
    use std::path::Path;

    use serde_json::Value;

    use crate::context::ValidationContext;
    use crate::registry::Validator;
    use labki_core::DiagnosticItem;

    /// Run `validator` over `manifest` with an empty schema.
    pub fn run(validator: &dyn Validator, manifest: &Value, manifest_path: &Path) -> Vec<DiagnosticItem> {
        let schema = Value::Object(Default::default());
        let ctx = ValidationContext::new(manifest, &schema, manifest_path);
        validator.validate(&ctx).unwrap()
    }

    /// Messages of `items`.
    pub fn messages(items: &[DiagnosticItem]) -> Vec<&str> {
        items.iter().map(|i| i.message.as_str()).collect()
    }
}
