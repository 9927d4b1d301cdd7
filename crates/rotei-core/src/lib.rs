//! Rotei Core Library
//!
//! Route-search engine over a weighted, undirected road graph: graph
//! building from a filtered edge catalogue, tied shortest paths, k-shortest
//! routes and multi-waypoint itineraries.

pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
