use crate::error::{Result, RoteiError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Opaque node identifier
pub type NodeId = String;

/// Total edge weight along a route; `f64::INFINITY` means unreachable
pub type Distance = f64;

/// Road category of a catalogue edge
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RoadCategory {
    /// Ordinary road
    #[default]
    Default,
    /// Mountain road, commonly avoided
    Mountain,
}

impl RoadCategory {
    /// All valid category names
    pub const VALID_TYPES: &'static [&'static str] = &["default", "mountain"];

    /// All categories
    pub const ALL: &'static [RoadCategory] = &[RoadCategory::Default, RoadCategory::Mountain];
}

impl FromStr for RoadCategory {
    type Err = RoteiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" => Ok(RoadCategory::Default),
            "mountain" => Ok(RoadCategory::Mountain),
            other => Err(RoteiError::unsupported(
                "road category",
                other,
                Self::VALID_TYPES.join(", "),
            )),
        }
    }
}

impl fmt::Display for RoadCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoadCategory::Default => write!(f, "default"),
            RoadCategory::Mountain => write!(f, "mountain"),
        }
    }
}

/// Undirected catalogue edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: f64,
    #[serde(default)]
    pub category: RoadCategory,
}

impl Edge {
    pub fn new(
        from: impl Into<NodeId>,
        to: impl Into<NodeId>,
        distance: f64,
        category: RoadCategory,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
            category,
        }
    }
}

/// Symmetric adjacency map: node -> neighbor -> weight
///
/// Nodes without any included edge are absent. A graph is built in one go
/// by the builder and is never patched afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Graph {
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl Graph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert both directions of an edge, overwriting any earlier weight
    pub(crate) fn insert_edge(&mut self, a: &str, b: &str, weight: f64) {
        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), weight);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), weight);
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Neighbors of `node` with edge weights, `None` when the node is absent
    pub fn neighbors(&self, node: &str) -> Option<&BTreeMap<NodeId, f64>> {
        self.adjacency.get(node)
    }

    /// Weight of the edge between `a` and `b`
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }
}

/// Ordered node sequence; consecutive nodes are adjacent in the graph that
/// produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<NodeId>);

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty(), "a path has at least one node");
        Path(nodes)
    }

    /// One-node path
    pub fn single(node: impl Into<NodeId>) -> Self {
        Path(vec![node.into()])
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Consecutive node pairs
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }

    /// Append the next itinerary segment, dropping its shared first node
    pub(crate) fn append_segment(&mut self, segment: &Path) {
        self.0.extend(segment.0.iter().skip(1).cloned());
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.0
    }
}

impl<S: Into<NodeId>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Path(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" → "))
    }
}

/// One rank of results: every path has total weight `distance`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteGroup {
    pub distance: Distance,
    pub paths: Vec<Path>,
}

impl RouteGroup {
    pub fn new(distance: Distance, paths: Vec<Path>) -> Self {
        Self { distance, paths }
    }

    /// The `(∞, [])` sentinel
    pub fn unreachable() -> Self {
        Self {
            distance: f64::INFINITY,
            paths: Vec::new(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite() && !self.paths.is_empty()
    }
}

/// A single path with its total weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPath {
    pub distance: Distance,
    pub path: Path,
}

/// Why a search stopped before exhausting its frontier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationReason {
    /// Dijkstra settles reached `node_count * tied_iteration_factor`
    MaxRelaxations,
    /// Spur searches reached `k * spur_iteration_factor`
    MaxSpurSearches,
}

impl fmt::Display for TruncationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruncationReason::MaxRelaxations => write!(f, "max_relaxations"),
            TruncationReason::MaxSpurSearches => write!(f, "max_spur_searches"),
        }
    }
}

/// Finder result plus whether an iteration cap cut it short
///
/// A truncated outcome is still well formed: it simply holds fewer (or no)
/// routes than an uncapped search would.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub value: T,
    pub truncation: Option<TruncationReason>,
}

impl<T> Outcome<T> {
    pub fn complete(value: T) -> Self {
        Self {
            value,
            truncation: None,
        }
    }

    pub fn truncated(value: T, reason: TruncationReason) -> Self {
        Self {
            value,
            truncation: Some(reason),
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }
}

/// Ranked route groups returned to renderers and formatters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RouteResultList {
    pub groups: Vec<RouteGroup>,
    pub truncated: bool,
    pub truncation_reason: Option<TruncationReason>,
}

impl RouteResultList {
    pub(crate) fn from_outcome(outcome: Outcome<Vec<RouteGroup>>) -> Self {
        Self {
            groups: outcome.value,
            truncated: outcome.truncation.is_some(),
            truncation_reason: outcome.truncation,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// First path of the best group, the one shown by default
    pub fn best_path(&self) -> Option<&Path> {
        self.groups.first().and_then(|g| g.paths.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_road_category_parsing() {
        assert_eq!(
            "mountain".parse::<RoadCategory>().unwrap(),
            RoadCategory::Mountain
        );
        assert_eq!(
            "DEFAULT".parse::<RoadCategory>().unwrap(),
            RoadCategory::Default
        );
        let err = "ferry".parse::<RoadCategory>().unwrap_err();
        assert!(matches!(err, RoteiError::Unsupported { .. }));
        assert_eq!(RoadCategory::Mountain.to_string(), "mountain");
    }

    #[test]
    fn test_graph_insert_is_symmetric() {
        let mut graph = Graph::new();
        graph.insert_edge("A", "B", 2.5);
        assert_eq!(graph.weight("A", "B"), Some(2.5));
        assert_eq!(graph.weight("B", "A"), Some(2.5));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.weight("A", "C").is_none());
    }

    #[test]
    fn test_path_append_segment() {
        let mut path: Path = ["A", "B"].into_iter().collect();
        let next: Path = ["B", "C", "D"].into_iter().collect();
        path.append_segment(&next);
        assert_eq!(path.nodes(), ["A", "B", "C", "D"]);
        assert_eq!(path.to_string(), "A → B → C → D");
        assert_eq!(path.hops().count(), 3);
    }

    #[test]
    fn test_unreachable_group() {
        let group = RouteGroup::unreachable();
        assert!(!group.is_reachable());
        assert!(group.distance.is_infinite());
        assert!(group.paths.is_empty());
    }

    #[test]
    fn test_route_list_serializes_truncation() {
        let list = RouteResultList::from_outcome(Outcome::truncated(
            vec![RouteGroup::new(4.0, vec![Path::single("A")])],
            TruncationReason::MaxSpurSearches,
        ));
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["truncated"], true);
        assert_eq!(json["truncation_reason"], "max_spur_searches");
        assert_eq!(json["groups"][0]["paths"][0][0], "A");
    }
}
