//! # Pack/Page Graph Model
//!
//! Nodes are packs and pages; edges are dependencies (dependency to
//! dependent) and inclusions (page to owning pack). Every edge endpoint is a
//! node: a pack or page referenced but never declared is added so the
//! rendered graph shows the dangling reference instead of dropping it.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use labki_core::{namespace_of, Manifest};

/// Namespace assigned to titles without a `Namespace:` prefix.
pub const MAIN_NAMESPACE: &str = "Main";

/// Role a pack plays in the dependency structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PackKind {
    /// Owns at least one page.
    Content,
    /// Owns no pages and bundles other packs.
    Aggregator,
    /// Neither: empty, or referenced without being declared.
    Other,
}

impl PackKind {
    /// Lowercase name used in class names and styles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Aggregator => "aggregator",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categorise every declared pack.
pub fn categorize_packs(manifest: &Manifest) -> BTreeMap<String, PackKind> {
    manifest
        .packs
        .iter()
        .map(|(id, pack)| {
            let kind = if !pack.pages.is_empty() {
                PackKind::Content
            } else if !pack.depends_on.is_empty() {
                PackKind::Aggregator
            } else {
                PackKind::Other
            };
            (id.clone(), kind)
        })
        .collect()
}

/// Namespace of `title`, or [`MAIN_NAMESPACE`].
pub fn page_namespace(title: &str) -> &str {
    namespace_of(title).unwrap_or(MAIN_NAMESPACE)
}

/// Nodes and edges extracted from a manifest, in deterministic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestGraph {
    /// Pack ids, sorted.
    pub pack_ids: Vec<String>,
    /// Page titles, sorted.
    pub page_titles: Vec<String>,
    /// `(dependency, dependent)` pairs.
    pub dependency_edges: Vec<(String, String)>,
    /// `(page title, pack id)` pairs.
    pub include_edges: Vec<(String, String)>,
    /// Kind of every pack in `pack_ids`.
    pub pack_kinds: BTreeMap<String, PackKind>,
}

impl ManifestGraph {
    /// Kind of `pack_id`, [`PackKind::Other`] if unknown.
    pub fn kind_of(&self, pack_id: &str) -> PackKind {
        self.pack_kinds
            .get(pack_id)
            .copied()
            .unwrap_or(PackKind::Other)
    }
}

/// Extract the pack/page graph from `manifest`.
pub fn extract_graph(manifest: &Manifest) -> ManifestGraph {
    let mut pack_ids: BTreeSet<String> = manifest.packs.keys().cloned().collect();
    let mut page_titles: BTreeSet<String> = manifest.pages.keys().cloned().collect();
    let mut dependency_edges = Vec::new();
    let mut include_edges = Vec::new();

    for (pack_id, pack) in &manifest.packs {
        for dep in &pack.depends_on {
            pack_ids.insert(dep.clone());
            dependency_edges.push((dep.clone(), pack_id.clone()));
        }
        for title in &pack.pages {
            page_titles.insert(title.clone());
            include_edges.push((title.clone(), pack_id.clone()));
        }
    }

    let mut pack_kinds = categorize_packs(manifest);
    for id in &pack_ids {
        pack_kinds.entry(id.clone()).or_insert(PackKind::Other);
    }

    ManifestGraph {
        pack_ids: pack_ids.into_iter().collect(),
        page_titles: page_titles.into_iter().collect(),
        dependency_edges,
        include_edges,
        pack_kinds,
    }
}
