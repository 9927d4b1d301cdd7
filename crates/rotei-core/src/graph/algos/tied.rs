use super::shared::Frontier;
use crate::config::SearchLimits;
use crate::graph::types::{Outcome, Path, RouteGroup, TruncationReason};
use crate::graph::view::GraphView;
use std::collections::HashMap;

/// State tracked during the tied-predecessor Dijkstra
struct TiedState {
    distances: HashMap<String, f64>,
    /// Every predecessor reaching a node at its minimum distance, in the
    /// order they were found
    predecessors: HashMap<String, Vec<String>>,
    frontier: Frontier,
}

impl TiedState {
    fn new(source: &str) -> Self {
        let mut state = Self {
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            frontier: Frontier::new(),
        };
        state.distances.insert(source.to_string(), 0.0);
        state.frontier.push(source, 0.0);
        state
    }

    fn distance(&self, node: &str) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Relax the edge `current -> neighbor`, keeping tied predecessors
    fn relax(
        &mut self,
        current: &str,
        cost: f64,
        neighbor: &str,
        weight: f64,
        limits: &SearchLimits,
    ) {
        let candidate = cost + weight;
        let known = self.distance(neighbor);

        if limits.improves(candidate, known) {
            self.distances.insert(neighbor.to_string(), candidate);
            self.predecessors
                .insert(neighbor.to_string(), vec![current.to_string()]);
            self.frontier.push(neighbor, candidate);
        } else if known.is_finite() && limits.ties(candidate, known) {
            let preds = self.predecessors.entry(neighbor.to_string()).or_default();
            if !preds.iter().any(|p| p == current) {
                preds.push(current.to_string());
            }
        }
    }
}

/// Find every minimum-distance path between `source` and `target`
///
/// Returns `(∞, [])` when either end is absent from the graph or no path
/// connects them. When the settle budget runs out before the target is
/// reached the result is also `(∞, [])`, flagged as truncated.
#[tracing::instrument(skip_all, fields(source = %source, target = %target))]
pub fn all_shortest_paths<G: GraphView + ?Sized>(
    view: &G,
    source: &str,
    target: &str,
    limits: &SearchLimits,
) -> Outcome<RouteGroup> {
    if !view.contains(source) || !view.contains(target) {
        tracing::debug!("endpoint absent from graph");
        return Outcome::complete(RouteGroup::unreachable());
    }

    let cap = limits.tied_cap(view.node_count());
    let mut state = TiedState::new(source);
    let mut reached = false;
    let mut truncated = false;

    while let Some((current, cost)) = state.frontier.settle_next() {
        if state.frontier.settled_count() > cap {
            truncated = true;
            break;
        }
        if current == target {
            reached = true;
            break;
        }

        for (neighbor, weight) in view.neighbors(&current) {
            if state.frontier.is_settled(neighbor) {
                continue;
            }
            state.relax(&current, cost, neighbor, weight, limits);
        }
    }

    if !reached {
        if truncated {
            tracing::debug!(cap, "tied search hit iteration cap");
            return Outcome::truncated(
                RouteGroup::unreachable(),
                TruncationReason::MaxRelaxations,
            );
        }
        return Outcome::complete(RouteGroup::unreachable());
    }

    let paths = reconstruct_paths(source, target, &state.predecessors);
    let distance = state.distance(target);
    tracing::debug!(distance, paths = paths.len(), "tied search complete");
    Outcome::complete(RouteGroup::new(distance, paths))
}

/// Walk predecessor sets back from `target`, forking on every tie
///
/// Predecessors only ever point at nodes settled earlier, so the walk
/// cannot cycle. An explicit stack keeps deep graphs off the call stack;
/// pushing predecessors in reverse keeps the output in discovery order.
fn reconstruct_paths(
    source: &str,
    target: &str,
    predecessors: &HashMap<String, Vec<String>>,
) -> Vec<Path> {
    let mut paths = Vec::new();
    let mut stack: Vec<Vec<String>> = vec![vec![target.to_string()]];

    while let Some(trail) = stack.pop() {
        let Some(node) = trail.last() else {
            continue;
        };
        if node == source {
            let mut nodes = trail;
            nodes.reverse();
            paths.push(Path::new(nodes));
            continue;
        }
        let Some(preds) = predecessors.get(node) else {
            continue;
        };
        for pred in preds.iter().rev() {
            let mut next = trail.clone();
            next.push(pred.clone());
            stack.push(next);
        }
    }

    paths
}

#[cfg(test)]
mod tests;
