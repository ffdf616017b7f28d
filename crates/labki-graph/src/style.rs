//! Colour palette shared by all emitters.

use serde::Serialize;

use crate::model::PackKind;

/// Fill and border colour of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NodeStyle {
    /// Background colour.
    pub fill: &'static str,
    /// Border colour.
    pub stroke: &'static str,
}

const fn node(fill: &'static str, stroke: &'static str) -> NodeStyle {
    NodeStyle { fill, stroke }
}

/// Style of a page in a namespace without its own colours.
pub const DEFAULT_PAGE_STYLE: NodeStyle = node("#F5F5F5", "#9E9E9E");

/// Namespaces with dedicated colours, in class-definition order.
pub const NAMESPACE_STYLES: &[(&str, NodeStyle)] = &[
    ("Template", node("#E3F2FD", "#42A5F5")),
    ("Form", node("#E8F5E9", "#43A047")),
    ("Category", node("#F3E5F5", "#AB47BC")),
    ("Property", node("#F1F8E9", "#7CB342")),
    ("Module", node("#EDE7F6", "#7E57C2")),
    ("Help", node("#FFFDE7", "#FBC02D")),
    ("MediaWiki", node("#ECEFF1", "#607D8B")),
    ("Main", DEFAULT_PAGE_STYLE),
];

/// Every pack kind, in class-definition order.
pub const PACK_KINDS: [PackKind; 3] = [PackKind::Content, PackKind::Aggregator, PackKind::Other];

/// Style of a pack of the given kind.
pub fn pack_style(kind: PackKind) -> NodeStyle {
    match kind {
        PackKind::Content => node("#E8F0FE", "#5C6BC0"),
        PackKind::Aggregator => node("#FFF3E0", "#FB8C00"),
        PackKind::Other => node("#ECEFF1", "#90A4AE"),
    }
}

/// Style of a page in `namespace`.
pub fn namespace_style(namespace: &str) -> NodeStyle {
    NAMESPACE_STYLES
        .iter()
        .find(|(ns, _)| *ns == namespace)
        .map(|(_, style)| *style)
        .unwrap_or(DEFAULT_PAGE_STYLE)
}

/// Colour of `depends_on` edges.
pub const DEPENDS_ON_COLOR: &str = "#90A4AE";
/// Stroke width of `depends_on` edges.
pub const DEPENDS_ON_WIDTH: f64 = 1.2;
/// Colour of page inclusion edges.
pub const INCLUDES_COLOR: &str = "#64B5F6";
/// Stroke width of page inclusion edges.
pub const INCLUDES_WIDTH: f64 = 1.4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_namespaces_use_default() {
        assert_eq!(namespace_style("Widget"), DEFAULT_PAGE_STYLE);
        assert_eq!(namespace_style("Module").fill, "#EDE7F6");
    }

    #[test]
    fn pack_kinds_have_distinct_fills() {
        let fills: Vec<_> = PACK_KINDS.iter().map(|k| pack_style(*k).fill).collect();
        assert_eq!(fills, vec!["#E8F0FE", "#FFF3E0", "#ECEFF1"]);
    }
}
