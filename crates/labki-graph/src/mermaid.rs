//! Mermaid flowchart emitter, for embedding in documentation.

use crate::dot::{pack_node_id, page_node_id};
use crate::model::{page_namespace, ManifestGraph};
use crate::style::{
    pack_style, DEPENDS_ON_COLOR, DEPENDS_ON_WIDTH, INCLUDES_COLOR, INCLUDES_WIDTH,
    NAMESPACE_STYLES, PACK_KINDS,
};

fn label(text: &str) -> String {
    text.replace('"', "\\\"")
}

/// Render `graph` as a left-to-right Mermaid flowchart. Packs are boxes,
/// pages are circles; link styles are applied by edge index, dependency
/// edges first.
pub fn emit_mermaid(graph: &ManifestGraph) -> String {
    let mut out = String::from("graph LR\n");

    for kind in PACK_KINDS {
        let style = pack_style(kind);
        out.push_str(&format!(
            "  classDef pack_{kind} fill:{},stroke:{},stroke-width:1px;\n",
            style.fill, style.stroke
        ));
    }
    for (namespace, style) in NAMESPACE_STYLES {
        out.push_str(&format!(
            "  classDef ns_{namespace} fill:{},stroke:{},stroke-width:1px;\n",
            style.fill, style.stroke
        ));
    }

    for pack_id in &graph.pack_ids {
        let id = pack_node_id(pack_id);
        out.push_str(&format!("  {id}[{}]\n", label(pack_id)));
        out.push_str(&format!("  class {id} pack_{}\n", graph.kind_of(pack_id)));
    }
    for title in &graph.page_titles {
        let id = page_node_id(title);
        out.push_str(&format!("  {id}(({}))\n", label(title)));
        out.push_str(&format!("  class {id} ns_{}\n", page_namespace(title)));
    }

    for (dependency, dependent) in &graph.dependency_edges {
        out.push_str(&format!(
            "  {} --> {}\n",
            pack_node_id(dependency),
            pack_node_id(dependent)
        ));
    }
    for (title, pack_id) in &graph.include_edges {
        out.push_str(&format!("  {} --> {}\n", page_node_id(title), pack_node_id(pack_id)));
    }

    let dependency_count = graph.dependency_edges.len();
    for index in 0..dependency_count {
        out.push_str(&format!(
            "  linkStyle {index} stroke:{DEPENDS_ON_COLOR},stroke-width:{DEPENDS_ON_WIDTH}px,stroke-dasharray:3 3;\n"
        ));
    }
    for index in dependency_count..dependency_count + graph.include_edges.len() {
        out.push_str(&format!(
            "  linkStyle {index} stroke:{INCLUDES_COLOR},stroke-width:{INCLUDES_WIDTH}px;\n"
        ));
    }
    out
}
