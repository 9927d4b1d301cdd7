//! Path-finding algorithm implementations
//!
//! - `dijkstra`: single shortest path, used for first routes and spurs
//! - `tied`: every minimum-distance path between two nodes
//! - `kshortest`: top-K distinct routes and distance tiers (bounded
//!   Yen-style search)
//! - `itinerary`: multi-waypoint composition over tied segments
//! - `shared`: frontier shared by the Dijkstra variants

pub mod dijkstra;
pub mod itinerary;
pub mod kshortest;
pub mod shared;
pub mod tied;

pub use dijkstra::shortest_path;
pub use itinerary::compose_waypoints;
pub use kshortest::{top_distance_tiers, top_k_distinct};
pub use tied::all_shortest_paths;
