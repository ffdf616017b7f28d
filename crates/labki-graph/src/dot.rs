//! Graphviz DOT emitter.

use labki_core::sanitize_graph_id;

use crate::model::{page_namespace, ManifestGraph};
use crate::style::{
    namespace_style, pack_style, DEPENDS_ON_COLOR, DEPENDS_ON_WIDTH, INCLUDES_COLOR, INCLUDES_WIDTH,
};

pub(crate) fn pack_node_id(pack_id: &str) -> String {
    sanitize_graph_id(&format!("pack_{pack_id}"))
}

pub(crate) fn page_node_id(title: &str) -> String {
    sanitize_graph_id(&format!("page_{title}"))
}

fn quote(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Render `graph` as a `digraph Manifest` with one cluster for packs and one
/// for pages.
pub fn emit_dot(graph: &ManifestGraph) -> String {
    let mut out = String::new();
    out.push_str("digraph Manifest {\n");
    out.push_str("  rankdir=LR;\n");
    out.push_str("  graph [bgcolor=\"white\", ranksep=\"0.7\", nodesep=\"0.5\"];\n\n");
    out.push_str(
        "  node [fontname=\"Helvetica\", style=filled, color=\"#90A4AE\", fillcolor=\"#ECEFF1\"];\n\n",
    );
    out.push_str("  edge [fontname=\"Helvetica\", arrowsize=0.8];\n\n");

    out.push_str("  subgraph cluster_packs {\n");
    out.push_str("    label=\"Packs\"; style=rounded; color=\"#5C6BC0\";\n");
    for pack_id in &graph.pack_ids {
        let style = pack_style(graph.kind_of(pack_id));
        out.push_str(&format!(
            "    {} [label=\"{}\", shape=box, fillcolor=\"{}\", color=\"{}\"];\n",
            pack_node_id(pack_id),
            quote(pack_id),
            style.fill,
            style.stroke
        ));
    }
    out.push_str("  }\n");

    out.push_str("  subgraph cluster_pages {\n");
    out.push_str("    label=\"Pages\"; style=rounded; color=\"#43A047\";\n");
    for title in &graph.page_titles {
        let style = namespace_style(page_namespace(title));
        out.push_str(&format!(
            "    {} [label=\"{}\", shape=ellipse, fillcolor=\"{}\", color=\"{}\"];\n",
            page_node_id(title),
            quote(title),
            style.fill,
            style.stroke
        ));
    }
    out.push_str("  }\n\n");

    for (dependency, dependent) in &graph.dependency_edges {
        out.push_str(&format!(
            "  {} -> {} [color=\"{DEPENDS_ON_COLOR}\", style=dashed, penwidth={DEPENDS_ON_WIDTH}, label=\"depends_on\", fontsize=10];\n",
            pack_node_id(dependency),
            pack_node_id(dependent)
        ));
    }
    for (title, pack_id) in &graph.include_edges {
        out.push_str(&format!(
            "  {} -> {} [color=\"{INCLUDES_COLOR}\", penwidth={INCLUDES_WIDTH}];\n",
            page_node_id(title),
            pack_node_id(pack_id)
        ));
    }
    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ManifestGraph, PackKind};

    fn graph() -> ManifestGraph {
        ManifestGraph {
            pack_ids: vec!["base".into(), "forms-pack".into()],
            page_titles: vec!["Template:A \"quoted\"".into()],
            dependency_edges: vec![("base".into(), "forms-pack".into())],
            include_edges: vec![("Template:A \"quoted\"".into(), "base".into())],
            pack_kinds: [("base".to_string(), PackKind::Content)].into_iter().collect(),
        }
    }

    #[test]
    fn renders_clusters_and_edges() {
        let dot = emit_dot(&graph());
        assert!(dot.starts_with("digraph Manifest {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("subgraph cluster_packs"));
        assert!(dot.contains("subgraph cluster_pages"));
        assert!(dot.contains("pack_forms_pack [label=\"forms-pack\", shape=box, fillcolor=\"#ECEFF1\""));
        assert!(dot.contains("pack_base [label=\"base\", shape=box, fillcolor=\"#E8F0FE\""));
        assert!(dot.contains("  pack_base -> pack_forms_pack [color=\"#90A4AE\", style=dashed"));
        assert!(dot.contains("  page_Template_A__quoted_ -> pack_base [color=\"#64B5F6\""));
    }

    #[test]
    fn labels_escape_backslashes_before_quotes() {
        let g = ManifestGraph {
            pack_ids: vec!["trailing\\".into()],
            page_titles: vec!["Help:a\\\"b".into()],
            ..ManifestGraph::default()
        };
        let dot = emit_dot(&g);
        assert!(dot.contains("[label=\"trailing\\\\\", shape=box"));
        assert!(dot.contains("[label=\"Help:a\\\\\\\"b\", shape=ellipse"));
    }

    #[test]
    fn labels_escape_quotes() {
        let dot = emit_dot(&graph());
        assert!(dot.contains("label=\"Template:A \\\"quoted\\\"\""));
    }
}
