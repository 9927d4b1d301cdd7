//! Configuration type definitions

use crate::graph::RoadCategory;
use serde::{Deserialize, Serialize};

/// Engine configuration, usually read from `rotei.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Search safety valves
    #[serde(default)]
    pub search: SearchLimits,

    /// Route request defaults
    #[serde(default)]
    pub route: RouteConfig,
}

/// Iteration caps and tie tolerance for the path finders
///
/// The caps are heuristic guards against degenerate inputs, not derived
/// bounds. A search that hits one reports itself as truncated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Dijkstra searches stop after settling `node_count * factor` nodes;
    /// stale frontier entries are free
    #[serde(default = "default_tied_iteration_factor")]
    pub tied_iteration_factor: usize,

    /// K-shortest search stops after `k * factor` spur searches
    #[serde(default = "default_spur_iteration_factor")]
    pub spur_iteration_factor: usize,

    /// Two distances within this tolerance count as tied (0 = exact)
    #[serde(default = "default_tie_epsilon")]
    pub tie_epsilon: f64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            tied_iteration_factor: default_tied_iteration_factor(),
            spur_iteration_factor: default_spur_iteration_factor(),
            tie_epsilon: default_tie_epsilon(),
        }
    }
}

/// Defaults applied to route requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Number of ranked routes to return for a two-point request
    #[serde(default = "default_max_routes")]
    pub max_routes: usize,

    /// Maximum number of intermediate waypoints
    #[serde(default = "default_max_via_points")]
    pub max_via_points: usize,

    /// Road categories excluded unless overridden on the command line
    #[serde(default)]
    pub avoid: Vec<RoadCategory>,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_routes: default_max_routes(),
            max_via_points: default_max_via_points(),
            avoid: Vec::new(),
        }
    }
}

fn default_tied_iteration_factor() -> usize {
    10
}

fn default_spur_iteration_factor() -> usize {
    20
}

fn default_tie_epsilon() -> f64 {
    1e-9
}

fn default_max_routes() -> usize {
    3
}

fn default_max_via_points() -> usize {
    5
}
