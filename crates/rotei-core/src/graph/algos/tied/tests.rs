use super::*;
use crate::graph::fixtures::{diamond, graph_of, lopsided_diamond, many_improvements, path_of};
use crate::graph::path::path_distance;
use crate::graph::types::Graph;

fn limits() -> SearchLimits {
    SearchLimits::default()
}

/// Two tied routes of length 4 are both returned, in discovery order
#[test]
fn test_all_shortest_paths_diamond_tie() {
    let group = all_shortest_paths(&diamond(), "A", "D", &limits()).value;

    assert_eq!(group.distance, 4.0);
    assert_eq!(
        group.paths,
        vec![path_of(&["A", "B", "D"]), path_of(&["A", "C", "D"])]
    );
}

#[test]
fn test_all_shortest_paths_unique() {
    let group = all_shortest_paths(&lopsided_diamond(), "A", "D", &limits()).value;

    assert_eq!(group.distance, 4.0);
    assert_eq!(group.paths, vec![path_of(&["A", "B", "D"])]);
}

#[test]
fn test_all_shortest_paths_same_node() {
    let group = all_shortest_paths(&diamond(), "C", "C", &limits()).value;

    assert_eq!(group.distance, 0.0);
    assert_eq!(group.paths, vec![path_of(&["C"])]);
}

#[test]
fn test_all_shortest_paths_absent_endpoint() {
    let outcome = all_shortest_paths(&diamond(), "A", "Z", &limits());
    assert_eq!(outcome.value, RouteGroup::unreachable());
    assert!(!outcome.is_truncated());

    let outcome = all_shortest_paths(&Graph::default(), "A", "A", &limits());
    assert!(!outcome.value.is_reachable());
}

#[test]
fn test_all_shortest_paths_disconnected() {
    let graph = graph_of(&[("A", "B", 1.0), ("C", "D", 1.0)]);
    let outcome = all_shortest_paths(&graph, "A", "D", &limits());

    assert!(outcome.value.distance.is_infinite());
    assert!(outcome.value.paths.is_empty());
    assert!(!outcome.is_truncated());
}

/// 2x3 unit grid: three distinct monotone routes from corner to corner
#[test]
fn test_all_shortest_paths_grid_is_complete_without_duplicates() {
    let graph = graph_of(&[
        ("A", "B", 1.0),
        ("B", "C", 1.0),
        ("D", "E", 1.0),
        ("E", "F", 1.0),
        ("A", "D", 1.0),
        ("B", "E", 1.0),
        ("C", "F", 1.0),
    ]);
    let group = all_shortest_paths(&graph, "A", "F", &limits()).value;

    assert_eq!(group.distance, 3.0);
    assert_eq!(group.paths.len(), 3);
    for expected in [
        path_of(&["A", "B", "C", "F"]),
        path_of(&["A", "B", "E", "F"]),
        path_of(&["A", "D", "E", "F"]),
    ] {
        assert_eq!(group.paths.iter().filter(|p| **p == expected).count(), 1);
    }
}

/// Two diamonds in series fork twice: 2 x 2 tied routes
#[test]
fn test_all_shortest_paths_forks_multiply() {
    let graph = graph_of(&[
        ("A", "B", 1.0),
        ("A", "C", 1.0),
        ("B", "D", 1.0),
        ("C", "D", 1.0),
        ("D", "E", 1.0),
        ("D", "F", 1.0),
        ("E", "G", 1.0),
        ("F", "G", 1.0),
    ]);
    let group = all_shortest_paths(&graph, "A", "G", &limits()).value;

    assert_eq!(group.distance, 4.0);
    assert_eq!(group.paths.len(), 4);
    for path in &group.paths {
        assert_eq!(path_distance(&graph, path), group.distance);
        assert_eq!(path.first(), Some("A"));
        assert_eq!(path.last(), Some("G"));
    }
}

/// Non-integer weights tie within the configured epsilon only
#[test]
fn test_all_shortest_paths_epsilon_ties() {
    let graph = graph_of(&[("A", "B", 0.1), ("B", "D", 0.2), ("A", "D", 0.3)]);

    let group = all_shortest_paths(&graph, "A", "D", &limits()).value;
    assert_eq!(
        group.paths,
        vec![path_of(&["A", "D"]), path_of(&["A", "B", "D"])]
    );

    let exact = SearchLimits {
        tie_epsilon: 0.0,
        ..Default::default()
    };
    let group = all_shortest_paths(&graph, "A", "D", &exact).value;
    assert_eq!(group.paths, vec![path_of(&["A", "D"])]);
}

/// Zero-weight roads tie without creating predecessor cycles
#[test]
fn test_all_shortest_paths_zero_weight_edges() {
    let graph = graph_of(&[("A", "B", 0.0), ("B", "C", 1.0), ("A", "C", 1.0)]);
    let group = all_shortest_paths(&graph, "A", "C", &limits()).value;

    assert_eq!(group.distance, 1.0);
    assert_eq!(
        group.paths,
        vec![path_of(&["A", "C"]), path_of(&["A", "B", "C"])]
    );
}

/// Shortest distances never exceed a direct road or a detour via a third node
#[test]
fn test_triangle_consistency() {
    let graph = graph_of(&[
        ("A", "B", 4.0),
        ("B", "C", 1.0),
        ("A", "C", 2.0),
        ("C", "D", 7.0),
        ("B", "D", 3.0),
        ("D", "E", 1.5),
        ("A", "E", 12.0),
    ]);
    let nodes: Vec<&str> = graph.nodes().collect();
    let dist = |a: &str, b: &str| all_shortest_paths(&graph, a, b, &limits()).value.distance;

    for a in &nodes {
        for b in &nodes {
            let d_ab = dist(a, b);
            if let Some(w) = graph.weight(a, b) {
                assert!(d_ab <= w, "{a}->{b}: {d_ab} > direct {w}");
            }
            for c in &nodes {
                assert!(d_ab <= dist(a, c) + dist(c, b) + 1e-9);
            }
            assert_eq!(d_ab, dist(b, a));
        }
    }
}

#[test]
fn test_all_shortest_paths_cap_is_no_path() {
    let graph = graph_of(&[
        ("A", "B", 10.0),
        ("A", "C", 1.0),
        ("C", "B", 1.0),
        ("B", "F", 100.0),
    ]);
    let zero = SearchLimits {
        tied_iteration_factor: 0,
        ..Default::default()
    };

    let outcome = all_shortest_paths(&graph, "A", "F", &zero);
    assert_eq!(outcome.value, RouteGroup::unreachable());
    assert_eq!(outcome.truncation, Some(TruncationReason::MaxRelaxations));

    let tight = SearchLimits {
        tied_iteration_factor: 1,
        ..Default::default()
    };
    let outcome = all_shortest_paths(&graph, "A", "F", &tight);
    assert_eq!(outcome.value.distance, 102.0);
    assert!(!outcome.is_truncated());
}

/// Repeated improvements leave stale heap entries behind; skipping them
/// must not use up the settle budget
#[test]
fn test_all_shortest_paths_survives_many_improvements() {
    let graph = many_improvements();
    let outcome = all_shortest_paths(&graph, "S", "T", &limits());

    assert!(!outcome.is_truncated());
    assert_eq!(outcome.value.distance, 1470.0);
    assert_eq!(outcome.value.paths.len(), 1);

    let mut expected = vec!["S".to_string()];
    expected.extend((1..=30).map(|i| format!("v{i}")));
    expected.extend(["u1".to_string(), "T".to_string()]);
    assert_eq!(outcome.value.paths[0], Path::new(expected));
}
