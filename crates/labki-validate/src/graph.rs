//! # Pack Dependency Graph
//!
//! Vertices are pack ids; an edge runs from a dependency to each pack that
//! depends on it. Only references to declared packs become edges, so an
//! unknown dependency never masquerades as a cycle; those are reported by
//! the dependency validator instead.

use std::collections::{BTreeMap, VecDeque};

use serde_json::{Map, Value};

/// Directed dependency graph over declared packs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    vertices: Vec<String>,
    edges: Vec<(String, String)>,
}

impl DependencyGraph {
    /// Build the graph from a raw `packs` registry.
    ///
    /// Non-array `depends_on` values and non-string entries are skipped.
    pub fn from_packs(packs: &Map<String, Value>) -> Self {
        let mut graph = Self::default();
        for pack_id in packs.keys() {
            graph.add_vertex(pack_id);
        }
        for (pack_id, meta) in packs {
            for dep in depends_on(meta) {
                if packs.contains_key(dep) {
                    graph.add_edge(dep, pack_id);
                }
            }
        }
        graph
    }

    /// Add a vertex; duplicates are ignored.
    pub fn add_vertex(&mut self, id: &str) {
        if !self.vertices.iter().any(|v| v == id) {
            self.vertices.push(id.to_string());
        }
    }

    /// Add an edge `dependency -> dependent`, adding either vertex if new.
    pub fn add_edge(&mut self, dependency: &str, dependent: &str) {
        self.add_vertex(dependency);
        self.add_vertex(dependent);
        self.edges
            .push((dependency.to_string(), dependent.to_string()));
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }

    /// Kahn's algorithm. Returns the vertices in topological order, or
    /// `None` if at least one cycle exists.
    pub fn topological_order(&self) -> Option<Vec<&str>> {
        let mut in_degree: BTreeMap<&str, usize> =
            self.vertices.iter().map(|v| (v.as_str(), 0)).collect();
        let mut outgoing: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (from, to) in &self.edges {
            outgoing.entry(from.as_str()).or_default().push(to.as_str());
            *in_degree.entry(to.as_str()).or_default() += 1;
        }

        let mut queue: VecDeque<&str> = self
            .vertices
            .iter()
            .map(String::as_str)
            .filter(|v| in_degree.get(v).copied() == Some(0))
            .collect();
        let mut order = Vec::with_capacity(self.vertices.len());
        while let Some(current) = queue.pop_front() {
            order.push(current);
            for &next in outgoing.get(current).into_iter().flatten() {
                if let Some(degree) = in_degree.get_mut(next) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(next);
                    }
                }
            }
        }

        (order.len() == self.vertices.len()).then_some(order)
    }

    /// True if the dependency edges contain a cycle.
    pub fn has_cycle(&self) -> bool {
        self.topological_order().is_none()
    }
}

/// String entries of a pack's `depends_on`, if it is an array.
pub(crate) fn depends_on(meta: &Value) -> impl Iterator<Item = &str> {
    meta.get("depends_on")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn packs(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn two_cycle_is_detected() {
        let g = DependencyGraph::from_packs(&packs(json!({
            "a": {"depends_on": ["b"]},
            "b": {"depends_on": ["a"]}
        })));
        assert!(g.has_cycle());
    }

    #[test]
    fn chain_is_acyclic() {
        let g = DependencyGraph::from_packs(&packs(json!({
            "a": {"depends_on": ["b"]},
            "b": {"depends_on": ["c"]},
            "c": {}
        })));
        assert!(!g.has_cycle());
        assert_eq!(g.topological_order().unwrap(), vec!["c", "b", "a"]);
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let g = DependencyGraph::from_packs(&packs(json!({"a": {"depends_on": ["a"]}})));
        assert!(g.has_cycle());
    }

    #[test]
    fn unknown_dependencies_are_not_edges() {
        let g = DependencyGraph::from_packs(&packs(json!({
            "a": {"depends_on": ["ghost"]},
            "b": {"depends_on": ["a", 7]}
        })));
        assert_eq!(g.edges(), &[("a".to_string(), "b".to_string())]);
        assert!(!g.has_cycle());
    }

    #[test]
    fn duplicate_dependency_entries_still_resolve() {
        let g = DependencyGraph::from_packs(&packs(json!({
            "a": {"depends_on": ["b", "b"]},
            "b": {}
        })));
        assert!(!g.has_cycle());
    }

    #[test]
    fn malformed_depends_on_is_ignored() {
        let g = DependencyGraph::from_packs(&packs(json!({"a": {"depends_on": "b"}, "b": {}})));
        assert!(g.edges().is_empty());
    }

    mod proptests {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn chains_never_cycle(n in 1usize..40) {
                let mut g = DependencyGraph::default();
                for i in 0..n {
                    g.add_vertex(&format!("p{i}"));
                }
                for i in 1..n {
                    g.add_edge(&format!("p{}", i - 1), &format!("p{i}"));
                }
                prop_assert!(!g.has_cycle());
            }

            #[test]
            fn closing_a_ring_always_cycles(n in 2usize..40) {
                let mut g = DependencyGraph::default();
                for i in 0..n {
                    g.add_edge(&format!("p{i}"), &format!("p{}", (i + 1) % n));
                }
                prop_assert!(g.has_cycle());
            }
        }
    }
}
