//! Top-level route ranking
//!
//! Two points get up to `max_routes` ranks of strictly increasing distance,
//! each holding every route of that distance. Three or more points are an
//! itinerary with a single rank holding every tied combination.

use super::algos::{compose_waypoints, top_distance_tiers};
use super::types::{Graph, Outcome, RankedPath, RouteGroup, RouteResultList};
use crate::config::SearchLimits;
use crate::error::{Result, RoteiError};

/// Rank the routes through `points` on `graph`
///
/// Returns at most `max_routes` groups with strictly increasing distances.
/// Tied routes share a group and never use up a rank.
/// The list is empty when no route exists, when fewer than two points are
/// given, or when `max_routes` is zero. Call [`check_points`] first to tell
/// those cases apart.
#[tracing::instrument(skip_all, fields(points = points.len(), max_routes = max_routes))]
pub fn find_top_routes<S: AsRef<str>>(
    points: &[S],
    max_routes: usize,
    graph: &Graph,
    limits: &SearchLimits,
) -> RouteResultList {
    if max_routes == 0 {
        return RouteResultList::default();
    }

    let outcome = match points {
        [from, to] => {
            let ranked =
                top_distance_tiers(graph, from.as_ref(), to.as_ref(), max_routes, limits);
            Outcome {
                value: group_by_distance(ranked.value, limits),
                truncation: ranked.truncation,
            }
        }
        [_, _, _, ..] => {
            let itinerary = compose_waypoints(graph, points, limits);
            let groups = if itinerary.value.is_reachable() {
                vec![itinerary.value]
            } else {
                Vec::new()
            };
            Outcome {
                value: groups,
                truncation: itinerary.truncation,
            }
        }
        _ => Outcome::complete(Vec::new()),
    };

    let result = RouteResultList::from_outcome(outcome);
    tracing::debug!(
        groups = result.len(),
        truncated = result.truncated,
        "ranked routes"
    );
    result
}

/// Fold consecutive routes of equal distance into one group per rank
fn group_by_distance(routes: Vec<RankedPath>, limits: &SearchLimits) -> Vec<RouteGroup> {
    let mut groups: Vec<RouteGroup> = Vec::new();
    for route in routes {
        match groups.last_mut() {
            Some(group) if limits.ties(group.distance, route.distance) => {
                group.paths.push(route.path);
            }
            _ => groups.push(RouteGroup::new(route.distance, vec![route.path])),
        }
    }
    groups
}

/// Caller-side checks before a search
///
/// The finders report all of these as an empty result; this tells the
/// user which one applies.
pub fn check_points<S: AsRef<str>>(graph: &Graph, points: &[S]) -> Result<()> {
    if points.len() < 2 {
        return Err(RoteiError::TooFewPoints {
            count: points.len(),
        });
    }
    if graph.is_empty() {
        return Err(RoteiError::EmptyGraph);
    }
    for point in points {
        let point = point.as_ref();
        if graph.neighbors(point).map_or(true, |n| n.is_empty()) {
            return Err(RoteiError::DisconnectedWaypoint {
                point: point.to_string(),
            });
        }
    }
    Ok(())
}
