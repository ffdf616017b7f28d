//! JSON graph emitter, for programmatic consumers.

use labki_core::Timestamp;
use serde::Serialize;

use crate::error::GraphResult;
use crate::model::{page_namespace, ManifestGraph};
use crate::style::{
    namespace_style, pack_style, NodeStyle, DEPENDS_ON_COLOR, DEPENDS_ON_WIDTH, INCLUDES_COLOR,
    INCLUDES_WIDTH,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum NodeType {
    Pack,
    Page,
}

#[derive(Debug, Serialize)]
struct Node<'a> {
    id: String,
    #[serde(rename = "type")]
    node_type: NodeType,
    label: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<&'a str>,
    style: NodeStyle,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum EdgeType {
    DependsOn,
    Includes,
}

#[derive(Debug, Serialize)]
struct EdgeStyle {
    color: &'static str,
    dashed: bool,
    width: f64,
}

#[derive(Debug, Serialize)]
struct Edge {
    from: String,
    to: String,
    #[serde(rename = "type")]
    edge_type: EdgeType,
    style: EdgeStyle,
}

#[derive(Debug, Serialize)]
struct Meta {
    generated_at: Timestamp,
}

#[derive(Debug, Serialize)]
struct Payload<'a> {
    nodes: Vec<Node<'a>>,
    edges: Vec<Edge>,
    meta: Meta,
}

/// Render `graph` as pretty-printed JSON stamped with the current time.
pub fn emit_json(graph: &ManifestGraph) -> GraphResult<String> {
    emit_json_at(graph, Timestamp::now())
}

/// Render `graph` as pretty-printed JSON stamped with `generated_at`.
///
/// Node ids are `pack:<id>` and `page:<title>`; the unsanitised names are
/// kept since JSON has no identifier restrictions.
pub fn emit_json_at(graph: &ManifestGraph, generated_at: Timestamp) -> GraphResult<String> {
    let packs = graph.pack_ids.iter().map(|id| Node {
        id: format!("pack:{id}"),
        node_type: NodeType::Pack,
        label: id,
        namespace: None,
        style: pack_style(graph.kind_of(id)),
    });
    let pages = graph.page_titles.iter().map(|title| {
        let namespace = page_namespace(title);
        Node {
            id: format!("page:{title}"),
            node_type: NodeType::Page,
            label: title,
            namespace: Some(namespace),
            style: namespace_style(namespace),
        }
    });

    let depends = graph.dependency_edges.iter().map(|(dependency, dependent)| Edge {
        from: format!("pack:{dependency}"),
        to: format!("pack:{dependent}"),
        edge_type: EdgeType::DependsOn,
        style: EdgeStyle {
            color: DEPENDS_ON_COLOR,
            dashed: true,
            width: DEPENDS_ON_WIDTH,
        },
    });
    let includes = graph.include_edges.iter().map(|(title, pack_id)| Edge {
        from: format!("page:{title}"),
        to: format!("pack:{pack_id}"),
        edge_type: EdgeType::Includes,
        style: EdgeStyle {
            color: INCLUDES_COLOR,
            dashed: false,
            width: INCLUDES_WIDTH,
        },
    });

    let payload = Payload {
        nodes: packs.chain(pages).collect(),
        edges: depends.chain(includes).collect(),
        meta: Meta { generated_at },
    };
    let mut out = serde_json::to_string_pretty(&payload)?;
    out.push('\n');
    Ok(out)
}
