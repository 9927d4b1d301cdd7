//! Top-K distinct routes between two nodes
//!
//! A bounded Yen-style search. Each round branches only from the most
//! recently accepted route: every node of that route becomes a spur node,
//! the roads it shares with earlier routes are hidden through an
//! [`ExclusionView`], and the shortest spur path is spliced back onto the
//! root. Candidates survive across rounds in a single pool.
//!
//! The pool always holds the next route in distance order once a round
//! completes, which is what lets the tier search stop exactly at the first
//! strictly longer candidate.

use super::dijkstra::shortest_path;
use crate::config::SearchLimits;
use crate::graph::path::path_distance;
use crate::graph::types::{Graph, NodeId, Outcome, Path, RankedPath, TruncationReason};
use crate::graph::view::ExclusionView;

/// How far a k-shortest search runs
#[derive(Debug, Clone, Copy)]
enum Goal {
    /// Stop once this many routes are accepted
    Routes(usize),
    /// Stop once this many distinct distances are covered, each with every
    /// route of that distance
    Tiers(usize),
}

impl Goal {
    fn spur_cap(self, limits: &SearchLimits) -> usize {
        match self {
            Goal::Routes(n) | Goal::Tiers(n) => limits.spur_cap(n),
        }
    }

    fn is_met(self, accepted: &[RankedPath]) -> bool {
        match self {
            Goal::Routes(k) => accepted.len() >= k,
            Goal::Tiers(_) => false,
        }
    }

    /// Whether `next`, the cheapest pending candidate, still belongs in
    /// the result
    fn admits(self, accepted: &[RankedPath], next: &RankedPath, limits: &SearchLimits) -> bool {
        match self {
            Goal::Routes(k) => accepted.len() < k,
            Goal::Tiers(n) => {
                let last = accepted.last().map_or(f64::INFINITY, |r| r.distance);
                tier_count(accepted, limits) < n || limits.ties(last, next.distance)
            }
        }
    }
}

/// Number of distinct distances among routes sorted by distance
fn tier_count(routes: &[RankedPath], limits: &SearchLimits) -> usize {
    routes
        .windows(2)
        .filter(|pair| !limits.ties(pair[0].distance, pair[1].distance))
        .count()
        + usize::from(!routes.is_empty())
}

/// Find up to `k` distinct routes from `source` to `target`, shortest first
///
/// Routes never repeat a node sequence and their distances never decrease.
/// Equal distances may appear more than once. At most
/// `k * spur_iteration_factor` spur searches run in total; hitting that
/// budget accepts the best route found so far and stops, flagged as
/// truncated.
#[tracing::instrument(skip_all, fields(source = %source, target = %target, k = k))]
pub fn top_k_distinct(
    graph: &Graph,
    source: &str,
    target: &str,
    k: usize,
    limits: &SearchLimits,
) -> Outcome<Vec<RankedPath>> {
    if k == 0 {
        return Outcome::complete(Vec::new());
    }
    search(graph, source, target, Goal::Routes(k), limits)
}

/// Find every route at each of the `tiers` shortest distinct distances
///
/// Unlike [`top_k_distinct`], tied routes do not use up the request: the
/// search keeps going until the next candidate is strictly longer than the
/// last wanted distance. The spur budget is `tiers * spur_iteration_factor`.
#[tracing::instrument(skip_all, fields(source = %source, target = %target, tiers = tiers))]
pub fn top_distance_tiers(
    graph: &Graph,
    source: &str,
    target: &str,
    tiers: usize,
    limits: &SearchLimits,
) -> Outcome<Vec<RankedPath>> {
    if tiers == 0 {
        return Outcome::complete(Vec::new());
    }
    search(graph, source, target, Goal::Tiers(tiers), limits)
}

fn search(
    graph: &Graph,
    source: &str,
    target: &str,
    goal: Goal,
    limits: &SearchLimits,
) -> Outcome<Vec<RankedPath>> {
    let first = shortest_path(graph, source, target, limits);
    let mut truncation = first.truncation;
    let Some(first) = first.value else {
        return Outcome {
            value: Vec::new(),
            truncation,
        };
    };

    let cap = goal.spur_cap(limits);
    let mut accepted = vec![first];
    let mut candidates: Vec<RankedPath> = Vec::new();
    let mut spurs = 0usize;

    while !goal.is_met(&accepted) {
        let last = accepted[accepted.len() - 1].path.clone();
        let nodes = last.nodes();
        let mut spent = false;

        for j in 0..nodes.len().saturating_sub(1) {
            if spurs >= cap {
                tracing::debug!(cap, accepted = accepted.len(), "spur search budget spent");
                truncation = Some(TruncationReason::MaxSpurSearches);
                spent = true;
                break;
            }
            spurs += 1;

            let view = spur_view(graph, &accepted, nodes, j);
            let spur = shortest_path(&view, &nodes[j], target, limits);
            if spur.is_truncated() && truncation.is_none() {
                truncation = spur.truncation;
            }
            let Some(spur) = spur.value else {
                continue;
            };

            let mut spliced: Vec<NodeId> = nodes[..=j].to_vec();
            spliced.extend(spur.path.into_nodes().into_iter().skip(1));
            let path = Path::new(spliced);

            let known = accepted
                .iter()
                .chain(candidates.iter())
                .any(|r| r.path == path);
            if known {
                continue;
            }
            let distance = path_distance(graph, &path);
            if distance.is_finite() {
                candidates.push(RankedPath { distance, path });
            }
        }

        let Some(best) = cheapest(&candidates) else {
            break;
        };
        if !goal.admits(&accepted, &candidates[best], limits) {
            break;
        }
        accepted.push(candidates.remove(best));
        if spent {
            break;
        }
    }

    tracing::debug!(routes = accepted.len(), spurs, "k-shortest search complete");
    Outcome {
        value: accepted,
        truncation,
    }
}

/// Overlay for the spur search rooted at position `j` of the last route
///
/// Hides every road an accepted route takes at a position where it runs
/// along the last route, up to and including the spur position. Routes
/// sharing the whole root also lose the road they leave the spur node by,
/// and the root nodes before the spur node are hidden.
fn spur_view<'g>(
    graph: &'g Graph,
    accepted: &[RankedPath],
    last: &[NodeId],
    j: usize,
) -> ExclusionView<'g> {
    let mut view = ExclusionView::new(graph);

    for route in accepted {
        let p = route.path.nodes();
        for n in 0..=j {
            if n + 1 >= p.len() || n + 1 >= last.len() {
                break;
            }
            if p[n] == last[n] && p[n + 1] == last[n + 1] {
                view.exclude_edge(&p[n], &p[n + 1]);
            }
        }
        if p.len() > j + 1 && p[..=j] == last[..=j] {
            view.exclude_edge(&p[j], &p[j + 1]);
        }
    }
    for node in &last[..j] {
        view.exclude_node(node);
    }

    view
}

/// Index of the cheapest candidate, earliest first on ties
fn cheapest(candidates: &[RankedPath]) -> Option<usize> {
    candidates
        .iter()
        .enumerate()
        .min_by(|(i, a), (j, b)| a.distance.total_cmp(&b.distance).then(i.cmp(j)))
        .map(|(i, _)| i)
}
