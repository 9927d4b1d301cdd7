//! Command implementations for rotei

pub mod dispatch;
pub mod graph;
pub mod nodes;
pub mod route;
