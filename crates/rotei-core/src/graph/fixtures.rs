//! Small graphs shared by the graph tests

use super::builder::build_graph;
use super::types::{Edge, Graph, Path, RoadCategory};

/// Graph with every edge in the default category
pub(crate) fn graph_of(edges: &[(&str, &str, f64)]) -> Graph {
    let edges: Vec<Edge> = edges
        .iter()
        .map(|(a, b, w)| Edge::new(*a, *b, *w, RoadCategory::Default))
        .collect();
    build_graph(&edges, |_| true)
}

/// A–B=2, B–D=2, A–C=3, C–D=1: two tied routes of length 4 from A to D
pub(crate) fn diamond() -> Graph {
    graph_of(&[("A", "B", 2.0), ("B", "D", 2.0), ("A", "C", 3.0), ("C", "D", 1.0)])
}

/// Same shape as `diamond` but with A–C=4, so A→D has a unique shortest
/// route (4) and a second-best route (5)
pub(crate) fn lopsided_diamond() -> Graph {
    graph_of(&[("A", "B", 2.0), ("B", "D", 2.0), ("A", "C", 4.0), ("C", "D", 1.0)])
}

pub(crate) fn path_of(nodes: &[&str]) -> Path {
    nodes.iter().copied().collect()
}

/// S feeds a 30-node chain v1..v30; every v links to each of u1..u30 with
/// weight `1000 - 2i`, so each u is improved 30 times before it settles.
/// The only shortest S→T route runs the whole chain, then v30–u1–T.
pub(crate) fn many_improvements() -> Graph {
    let mut edges = vec![
        Edge::new("S", "v1", 1.0, RoadCategory::Default),
        Edge::new("u1", "T", 500.0, RoadCategory::Default),
    ];
    for i in 1..30 {
        edges.push(Edge::new(
            format!("v{i}"),
            format!("v{}", i + 1),
            1.0,
            RoadCategory::Default,
        ));
    }
    for i in 1..=30 {
        for j in 1..=30 {
            edges.push(Edge::new(
                format!("v{i}"),
                format!("u{j}"),
                1000.0 - 2.0 * i as f64,
                RoadCategory::Default,
            ));
        }
    }
    build_graph(&edges, |_| true)
}
