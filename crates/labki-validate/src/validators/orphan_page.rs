use std::collections::HashSet;
use std::path::{Path, PathBuf};

use labki_core::{DiagnosticItem, Level};
use serde_json::Value;

use crate::context::ValidationContext;
use crate::error::ValidatorError;
use crate::registry::Validator;

const PAGES_DIR: &str = "pages";
const PAGE_EXTENSIONS: &[&str] = &["wiki", "md"];

/// Warns about `.wiki` / `.md` files under `pages/` that no page entry
/// references. A missing `pages/` directory yields nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrphanPageValidator;

impl Validator for OrphanPageValidator {
    fn name(&self) -> &'static str {
        "orphan-page"
    }

    fn code(&self) -> &'static str {
        "page-orphan"
    }

    fn default_level(&self) -> Level {
        Level::Warning
    }

    fn description(&self) -> &'static str {
        "Detect orphan page files not listed in manifest"
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Result<Vec<DiagnosticItem>, ValidatorError> {
        let manifest_dir = ctx.manifest_dir();
        let pages_dir = manifest_dir.join(PAGES_DIR);
        if !pages_dir.is_dir() {
            return Ok(Vec::new());
        }

        let referenced: HashSet<PathBuf> = ctx
            .pages
            .values()
            .filter_map(|meta| meta.get("file").and_then(Value::as_str))
            .filter_map(|file| ctx.resolve_file(file).canonicalize().ok())
            .collect();

        // The root itself must be readable; unreadable subdirectories are
        // logged and skipped.
        std::fs::read_dir(&pages_dir).map_err(|source| ValidatorError::Io {
            path: pages_dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        walk_page_files(&pages_dir, &mut files);
        files.sort();

        let items = files
            .into_iter()
            .filter(|file| {
                file.canonicalize()
                    .map(|abs| !referenced.contains(&abs))
                    .unwrap_or(true)
            })
            .map(|file| {
                let rel = display_relative(&file, &manifest_dir);
                DiagnosticItem::new(
                    self.default_level(),
                    format!("Orphan page file not referenced in manifest: {rel}"),
                )
                .with_code(self.code())
                .with_location(rel)
            })
            .collect();
        Ok(items)
    }
}

fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext))
}

fn walk_page_files(dir: &Path, acc: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            tracing::warn!(
                dir = %dir.display(),
                error = %e,
                "failed to read directory during orphan scan"
            );
            return;
        }
    };
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                continue;
            }
        };
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                tracing::warn!(path = %entry.path().display(), error = %e, "failed to read file type");
                continue;
            }
        };
        let path = entry.path();
        // Symlinked directories are not descended into.
        if file_type.is_dir() {
            walk_page_files(&path, acc);
        } else if is_page_file(&path) && path.is_file() {
            acc.push(path);
        }
    }
}

/// `file` relative to `base` with forward slashes.
fn display_relative(file: &Path, base: &Path) -> String {
    let rel = file.strip_prefix(base).unwrap_or(file);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
