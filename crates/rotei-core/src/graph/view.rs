//! Read-only graph access for the path finders
//!
//! The k-shortest search needs "the graph minus a few edges and nodes" once
//! per spur search. `ExclusionView` provides that as an overlay on a borrowed
//! `Graph` so no search ever copies the adjacency map.

use super::types::Graph;
use std::collections::HashSet;

/// Trait for providing adjacency to the finders
pub trait GraphView {
    /// Whether `node` is present (and not excluded)
    fn contains(&self, node: &str) -> bool;

    /// Node count of the underlying graph, used to size iteration caps
    fn node_count(&self) -> usize;

    /// Traversable neighbors of `node` with edge weights, in stable order
    fn neighbors(&self, node: &str) -> Vec<(&str, f64)>;
}

impl GraphView for Graph {
    fn contains(&self, node: &str) -> bool {
        Graph::contains(self, node)
    }

    fn node_count(&self) -> usize {
        Graph::node_count(self)
    }

    fn neighbors(&self, node: &str) -> Vec<(&str, f64)> {
        Graph::neighbors(self, node)
            .map(|n| n.iter().map(|(id, w)| (id.as_str(), *w)).collect())
            .unwrap_or_default()
    }
}

/// A graph with some undirected edges and nodes hidden
#[derive(Debug, Clone)]
pub struct ExclusionView<'g> {
    graph: &'g Graph,
    edges: HashSet<(String, String)>,
    nodes: HashSet<String>,
}

impl<'g> ExclusionView<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            edges: HashSet::new(),
            nodes: HashSet::new(),
        }
    }

    /// Hide the edge between `a` and `b` in both directions
    pub fn exclude_edge(&mut self, a: &str, b: &str) {
        self.edges.insert(edge_key(a, b));
    }

    /// Hide a node and every edge touching it
    pub fn exclude_node(&mut self, node: &str) {
        self.nodes.insert(node.to_string());
    }

    pub fn is_edge_excluded(&self, a: &str, b: &str) -> bool {
        self.edges.contains(&edge_key(a, b))
    }

    pub fn excluded_edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl GraphView for ExclusionView<'_> {
    fn contains(&self, node: &str) -> bool {
        self.graph.contains(node) && !self.nodes.contains(node)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn neighbors(&self, node: &str) -> Vec<(&str, f64)> {
        if self.nodes.contains(node) {
            return Vec::new();
        }
        let Some(adjacent) = self.graph.neighbors(node) else {
            return Vec::new();
        };
        adjacent
            .iter()
            .filter(|(id, _)| !self.nodes.contains(id.as_str()))
            .filter(|(id, _)| !self.is_edge_excluded(node, id))
            .map(|(id, w)| (id.as_str(), *w))
            .collect()
    }
}

fn edge_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
