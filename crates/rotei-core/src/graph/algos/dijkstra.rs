//! Single-path Dijkstra, used for the first route and every spur search of
//! the k-shortest finder

use super::shared::Frontier;
use crate::config::SearchLimits;
use crate::graph::types::{Outcome, Path, RankedPath, TruncationReason};
use crate::graph::view::GraphView;
use std::collections::HashMap;

/// Find one shortest path from `source` to `target`
///
/// Equal-cost alternatives are resolved by frontier insertion order, so the
/// same inputs always give the same path. Returns `None` when either end is
/// absent or unreachable, and `None` with a truncation reason when the
/// settle budget ran out before the target was settled.
pub fn shortest_path<G: GraphView + ?Sized>(
    view: &G,
    source: &str,
    target: &str,
    limits: &SearchLimits,
) -> Outcome<Option<RankedPath>> {
    if !view.contains(source) || !view.contains(target) {
        return Outcome::complete(None);
    }

    let cap = limits.tied_cap(view.node_count());
    let mut distances: HashMap<String, f64> = HashMap::new();
    let mut previous: HashMap<String, String> = HashMap::new();
    let mut frontier = Frontier::new();

    distances.insert(source.to_string(), 0.0);
    frontier.push(source, 0.0);

    let mut reached = false;
    let mut truncated = false;
    while let Some((current, cost)) = frontier.settle_next() {
        if frontier.settled_count() > cap {
            truncated = true;
            break;
        }
        if current == target {
            reached = true;
            break;
        }

        for (neighbor, weight) in view.neighbors(&current) {
            if frontier.is_settled(neighbor) {
                continue;
            }
            let candidate = cost + weight;
            let known = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
            if limits.improves(candidate, known) {
                distances.insert(neighbor.to_string(), candidate);
                previous.insert(neighbor.to_string(), current.clone());
                frontier.push(neighbor, candidate);
            }
        }
    }

    if !reached {
        if truncated {
            tracing::debug!(source, target, cap, "shortest path search hit iteration cap");
            return Outcome::truncated(None, TruncationReason::MaxRelaxations);
        }
        return Outcome::complete(None);
    }

    let mut nodes = vec![target.to_string()];
    let mut current = target;
    while current != source {
        match previous.get(current) {
            Some(pred) => {
                nodes.push(pred.clone());
                current = pred.as_str();
            }
            None => return Outcome::complete(None),
        }
    }
    nodes.reverse();

    Outcome::complete(Some(RankedPath {
        distance: distances.get(target).copied().unwrap_or(f64::INFINITY),
        path: Path::new(nodes),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures::{diamond, graph_of, lopsided_diamond, many_improvements, path_of};
    use crate::graph::view::ExclusionView;

    #[test]
    fn test_shortest_path_basic() {
        let graph = lopsided_diamond();
        let found = shortest_path(&graph, "A", "D", &SearchLimits::default())
            .value
            .unwrap();
        assert_eq!(found.distance, 4.0);
        assert_eq!(found.path, path_of(&["A", "B", "D"]));
    }

    #[test]
    fn test_shortest_path_tie_is_deterministic() {
        let graph = diamond();
        let limits = SearchLimits::default();
        let first = shortest_path(&graph, "A", "D", &limits).value.unwrap();
        for _ in 0..5 {
            let again = shortest_path(&graph, "A", "D", &limits).value.unwrap();
            assert_eq!(again, first);
        }
        assert_eq!(first.distance, 4.0);
    }

    #[test]
    fn test_shortest_path_same_node() {
        let graph = diamond();
        let found = shortest_path(&graph, "B", "B", &SearchLimits::default())
            .value
            .unwrap();
        assert_eq!(found.distance, 0.0);
        assert_eq!(found.path, path_of(&["B"]));
    }

    #[test]
    fn test_shortest_path_absent_or_unreachable() {
        let graph = graph_of(&[("A", "B", 1.0), ("C", "D", 1.0)]);
        let limits = SearchLimits::default();
        assert!(shortest_path(&graph, "A", "Z", &limits).value.is_none());
        let outcome = shortest_path(&graph, "A", "D", &limits);
        assert!(outcome.value.is_none());
        assert!(!outcome.is_truncated());
    }

    #[test]
    fn test_shortest_path_respects_exclusions() {
        let graph = lopsided_diamond();
        let mut view = ExclusionView::new(&graph);
        view.exclude_edge("A", "B");
        let found = shortest_path(&view, "A", "D", &SearchLimits::default())
            .value
            .unwrap();
        assert_eq!(found.path, path_of(&["A", "C", "D"]));
        assert_eq!(found.distance, 5.0);
    }

    #[test]
    fn test_shortest_path_stale_entries_do_not_spend_budget() {
        let graph = many_improvements();
        let outcome = shortest_path(&graph, "S", "T", &SearchLimits::default());

        assert!(!outcome.is_truncated());
        let found = outcome.value.unwrap();
        assert_eq!(found.distance, 1470.0);
        assert_eq!(found.path.len(), 33);
        assert_eq!(found.path.nodes()[30], "v30");
        assert_eq!(found.path.nodes()[31], "u1");
    }

    #[test]
    fn test_shortest_path_cap_reports_truncation() {
        let graph = graph_of(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]);
        let tight = SearchLimits {
            tied_iteration_factor: 1,
            ..Default::default()
        };
        // one settle per node always fits a budget of one per node
        assert!(shortest_path(&graph, "A", "D", &tight).value.is_some());

        let zero = SearchLimits {
            tied_iteration_factor: 0,
            ..Default::default()
        };
        let outcome = shortest_path(&graph, "A", "D", &zero);
        assert!(outcome.value.is_none());
        assert_eq!(outcome.truncation, Some(TruncationReason::MaxRelaxations));
    }
}
