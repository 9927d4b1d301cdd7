//! Graph construction from the master edge list

use super::types::{Edge, Graph, RoadCategory};
use std::collections::BTreeSet;

/// Road-category toggles from the settings provider
///
/// An empty filter includes every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    excluded: BTreeSet<RoadCategory>,
}

impl CategoryFilter {
    /// Include every category
    pub fn all() -> Self {
        Self::default()
    }

    pub fn excluding(categories: impl IntoIterator<Item = RoadCategory>) -> Self {
        Self {
            excluded: categories.into_iter().collect(),
        }
    }

    /// The "avoid mountain roads" setting
    pub fn avoid_mountain() -> Self {
        Self::excluding([RoadCategory::Mountain])
    }

    pub fn exclude(&mut self, category: RoadCategory) {
        self.excluded.insert(category);
    }

    pub fn includes(&self, category: RoadCategory) -> bool {
        !self.excluded.contains(&category)
    }

    pub fn excluded(&self) -> impl Iterator<Item = RoadCategory> + '_ {
        self.excluded.iter().copied()
    }

    pub fn is_unrestricted(&self) -> bool {
        self.excluded.is_empty()
    }
}

/// Build an undirected graph from the edges whose category passes `include`
///
/// Both directions of every included edge are inserted with the same
/// weight. A later duplicate of the same node pair overwrites the earlier
/// weight.
pub fn build_graph<F>(edges: &[Edge], include: F) -> Graph
where
    F: Fn(RoadCategory) -> bool,
{
    let mut graph = Graph::new();
    let mut skipped = 0usize;

    for edge in edges {
        if !include(edge.category) {
            skipped += 1;
            continue;
        }
        graph.insert_edge(&edge.from, &edge.to, edge.distance);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        skipped,
        "built filtered graph"
    );
    graph
}

impl Graph {
    /// Build a graph honoring a category filter
    pub fn build(edges: &[Edge], filter: &CategoryFilter) -> Graph {
        build_graph(edges, |category| filter.includes(category))
    }
}
