//! Rendering manifests loaded from disk.

use std::path::PathBuf;

use labki_graph::{render_file, GraphError, GraphFormat};

const MANIFEST: &str = r#"
schema_version: 1.0.0
name: demo
pages:
  Template:Person:
    file: pages/Templates/Person.wiki
    last_updated: 2025-09-22T00:00:00Z
  Form:Person:
    file: pages/Forms/Person.wiki
    last_updated: 2025-09-22T00:00:00Z
packs:
  templates:
    version: 1.0.0
    pages: [Template:Person]
  forms:
    version: 1.0.0
    pages: [Form:Person]
    depends_on: [templates]
  lab:
    version: 1.0.0
    depends_on: [templates, forms]
"#;

fn write(dir: &tempfile::TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("manifest.yml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn dot_output_for_a_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let dot = render_file(&write(&dir, MANIFEST), GraphFormat::Dot).unwrap();
    assert!(dot.starts_with("digraph Manifest {"));
    assert!(dot.contains("pack_lab [label=\"lab\", shape=box, fillcolor=\"#FFF3E0\""));
    assert!(dot.contains("page_Form_Person [label=\"Form:Person\", shape=ellipse, fillcolor=\"#E8F5E9\""));
    assert!(dot.contains("pack_templates -> pack_forms"));
    assert!(dot.contains("page_Template_Person -> pack_templates"));
}

#[test]
fn mermaid_output_for_a_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let out = render_file(&write(&dir, MANIFEST), GraphFormat::Mermaid).unwrap();
    assert!(out.starts_with("graph LR\n"));
    assert!(out.contains("  class pack_lab pack_aggregator\n"));
    assert!(out.contains("  class pack_forms pack_content\n"));
    // three dependency edges, two inclusions
    assert!(out.contains("  linkStyle 2 stroke:#90A4AE"));
    assert!(out.contains("  linkStyle 4 stroke:#64B5F6"));
    assert!(!out.contains("linkStyle 5"));
}

#[test]
fn json_output_for_a_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let out = render_file(&write(&dir, MANIFEST), GraphFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(value["edges"].as_array().unwrap().len(), 5);
    assert!(value["meta"]["generated_at"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn unreadable_manifest_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = render_file(&dir.path().join("missing.yml"), GraphFormat::Dot).unwrap_err();
    assert!(matches!(err, GraphError::Manifest(_)));
    assert!(err.to_string().starts_with("failed to read manifest for graph generation"));
}

#[test]
fn duplicate_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "schema_version: 1.0.0\nname: a\nname: b\n");
    assert!(render_file(&path, GraphFormat::Dot).is_err());
}
