//! Route search over a weighted, undirected road graph
//!
//! Provides:
//! - Graph building from a category-filtered edge list
//! - Tied shortest paths, top-K routes and multi-waypoint itineraries
//! - A read-only view trait with an exclusion overlay for spur searches
//! - Path membership and distance queries for renderers and formatters

pub mod algos;
pub mod builder;
pub mod path;
pub mod ranking;
pub mod types;
pub mod view;

#[cfg(test)]
mod fixtures;

pub use algos::{
    all_shortest_paths, compose_waypoints, shortest_path, top_distance_tiers, top_k_distinct,
};
pub use builder::{build_graph, CategoryFilter};
pub use path::{edge_in_path, node_in_path, path_distance, visible_legs, Leg};
pub use ranking::{check_points, find_top_routes};
pub use types::{
    Distance, Edge, Graph, NodeId, Outcome, Path, RankedPath, RoadCategory, RouteGroup,
    RouteResultList, TruncationReason,
};
pub use view::{ExclusionView, GraphView};
