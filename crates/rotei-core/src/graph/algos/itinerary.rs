use super::tied::all_shortest_paths;
use crate::config::SearchLimits;
use crate::graph::types::{Outcome, Path, RouteGroup};
use crate::graph::view::GraphView;

/// Shortest route visiting `points` in order, with every tied combination
///
/// Each consecutive pair is solved with [`all_shortest_paths`]; the total
/// distance is the sum of the segment distances and the path set is the
/// Cartesian product of the segment path sets. Any unreachable segment
/// makes the whole itinerary `(∞, [])`, as does a list of fewer than two
/// points.
///
/// The product is not capped: an itinerary through `n` segments with `t`
/// ties each yields `t^n` paths.
#[tracing::instrument(skip_all, fields(points = points.len()))]
pub fn compose_waypoints<G, S>(view: &G, points: &[S], limits: &SearchLimits) -> Outcome<RouteGroup>
where
    G: GraphView + ?Sized,
    S: AsRef<str>,
{
    if points.len() < 2 {
        return Outcome::complete(RouteGroup::unreachable());
    }

    let mut total = 0.0;
    let mut combined: Vec<Path> = Vec::new();

    for (i, pair) in points.windows(2).enumerate() {
        let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
        let segment = all_shortest_paths(view, from, to, limits);
        if !segment.value.is_reachable() {
            tracing::debug!(segment = i, from, to, "itinerary segment unreachable");
            return Outcome {
                value: RouteGroup::unreachable(),
                truncation: segment.truncation,
            };
        }

        total += segment.value.distance;
        combined = if i == 0 {
            segment.value.paths
        } else {
            extend_all(&combined, &segment.value.paths)
        };
    }

    tracing::debug!(distance = total, paths = combined.len(), "itinerary composed");
    Outcome::complete(RouteGroup::new(total, combined))
}

/// Every prefix followed by every segment, prefix-major
fn extend_all(prefixes: &[Path], segments: &[Path]) -> Vec<Path> {
    let mut out = Vec::with_capacity(prefixes.len() * segments.len());
    for prefix in prefixes {
        for segment in segments {
            let mut path = prefix.clone();
            path.append_segment(segment);
            out.push(path);
        }
    }
    out
}
