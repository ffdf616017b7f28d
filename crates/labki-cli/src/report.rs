//! # Report Rendering
//!
//! Human-readable and JSON renderings of a validation run. Items are grouped
//! by level (errors, warnings, info) in that order, each group keeping the
//! order the validators produced.

use anyhow::{Context, Result};
use labki_core::{DiagnosticItem, Diagnostics};

fn render_section(out: &mut String, label: &str, items: &[&DiagnosticItem]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{label}:\n"));
    for item in items {
        let level = item.level.as_str().to_ascii_uppercase();
        let code = item.code.as_deref().unwrap_or("-");
        out.push_str(&format!("  {level:<8}{code:<26}{}", item.message));
        if let Some(location) = &item.location {
            out.push_str(&format!(" (at {location})"));
        }
        out.push('\n');
    }
    out.push('\n');
}

/// Render `diagnostics` as sectioned text followed by the summary line.
pub fn render_human(diagnostics: &Diagnostics, title: Option<&str>) -> String {
    let mut out = String::new();
    if let Some(title) = title {
        out.push_str(&format!("== {title} ==\n\n"));
    }
    render_section(&mut out, "Errors", &diagnostics.errors());
    render_section(&mut out, "Warnings", &diagnostics.warnings());
    render_section(&mut out, "Info", &diagnostics.infos());
    out.push_str(&format!(
        "Validation completed: {}\n",
        diagnostics.summary()
    ));
    out
}

/// Render `diagnostics` as the pretty-printed JSON report.
pub fn render_json(diagnostics: &Diagnostics) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&diagnostics.to_report())
        .context("failed to serialize validation report")?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labki_core::Report;

    fn sample() -> Diagnostics {
        let mut d = Diagnostics::new();
        d.add(DiagnosticItem::warning("Orphan page file not referenced in manifest: pages/x.wiki")
            .with_code("page-orphan")
            .with_location("pages/x.wiki"));
        d.add(DiagnosticItem::error("Dependency cycle detected among packs").with_code("pack-cycles"));
        d.add(DiagnosticItem::info("noted"));
        d
    }

    #[test]
    fn human_report_groups_by_level() {
        let out = render_human(&sample(), Some("Validation results"));
        let errors = out.find("Errors:").unwrap();
        let warnings = out.find("Warnings:").unwrap();
        let info = out.find("Info:").unwrap();
        assert!(out.starts_with("== Validation results =="));
        assert!(errors < warnings && warnings < info);
        assert!(out.contains("ERROR   pack-cycles"));
        assert!(out.contains("(at pages/x.wiki)"));
        assert!(out.contains("INFO    -"));
        assert!(out.ends_with("Validation completed: 1 error(s), 1 warning(s), 1 info(s)\n"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let out = render_human(&Diagnostics::new(), None);
        assert_eq!(out, "Validation completed: 0 error(s), 0 warning(s), 0 info(s)\n");
    }

    #[test]
    fn json_report_parses_back() {
        let out = render_json(&sample()).unwrap();
        let report: Report = serde_json::from_str(&out).unwrap();
        assert_eq!(report.summary.errors, 1);
        assert_eq!(report.summary.exit_code, 1);
        assert_eq!(report.items.len(), 3);
    }
}
