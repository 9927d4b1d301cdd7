//! Membership and distance queries over computed paths
//!
//! Renderers highlight the nodes and roads of a selected route; formatters
//! print the distance between consecutive named stops. Both only need the
//! path as an ordered sequence plus the graph it was computed on.

use super::types::{Distance, Graph, NodeId, Path};
use serde::Serialize;

/// Whether `name` appears anywhere in `path`
pub fn node_in_path(name: &str, path: &Path) -> bool {
    path.nodes().iter().any(|n| n == name)
}

/// Whether the road between `a` and `b` is traversed by `path`, in either
/// direction
pub fn edge_in_path(a: &str, b: &str, path: &Path) -> bool {
    path.hops()
        .any(|(from, to)| (from == a && to == b) || (from == b && to == a))
}

/// Total weight of `path`, or infinity when a hop is not a road in `graph`
pub fn path_distance(graph: &Graph, path: &Path) -> Distance {
    let mut total = 0.0;
    for (from, to) in path.hops() {
        match graph.weight(from, to) {
            Some(w) => total += w,
            None => return f64::INFINITY,
        }
    }
    total
}

/// Distance between two consecutive visible stops of a path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: Distance,
}

/// Split `path` into legs between visible nodes
///
/// Hidden junctions are folded into the surrounding leg, whose distance is
/// the sum of the hops it spans. A hop that is not a road in `graph` makes
/// its leg infinite.
pub fn visible_legs<F>(graph: &Graph, path: &Path, is_hidden: F) -> Vec<Leg>
where
    F: Fn(&str) -> bool,
{
    let mut legs = Vec::new();
    let mut last_visible: Option<&str> = None;
    let mut accumulated = 0.0;
    let mut previous: Option<&str> = None;

    for node in path.nodes().iter().map(String::as_str) {
        if let Some(prev) = previous {
            accumulated += graph.weight(prev, node).unwrap_or(f64::INFINITY);
        }
        previous = Some(node);

        if is_hidden(node) {
            continue;
        }
        if let Some(from) = last_visible {
            legs.push(Leg {
                from: from.to_string(),
                to: node.to_string(),
                distance: accumulated,
            });
        }
        last_visible = Some(node);
        accumulated = 0.0;
    }

    legs
}
