//! Engine configuration for rotei
//!
//! Configuration is stored as TOML with a `[search]` table for the path
//! finders and a `[route]` table for request defaults. Every field has a
//! default, so an empty file is a valid configuration.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{RoteiError, Result};
use crate::graph::CategoryFilter;

pub use types::{EngineConfig, RouteConfig, SearchLimits};

impl SearchLimits {
    /// Settle budget for a Dijkstra search over `node_count` nodes
    pub fn tied_cap(&self, node_count: usize) -> usize {
        node_count.max(1).saturating_mul(self.tied_iteration_factor)
    }

    /// Spur search budget for a k-shortest request
    pub fn spur_cap(&self, k: usize) -> usize {
        k.saturating_mul(self.spur_iteration_factor)
    }

    /// Whether two finite distances are equal within the tie tolerance
    pub fn ties(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tie_epsilon
    }

    /// Whether `candidate` strictly improves on `current`
    pub fn improves(&self, candidate: f64, current: f64) -> bool {
        if current.is_infinite() {
            return candidate.is_finite();
        }
        candidate < current - self.tie_epsilon
    }
}

impl EngineConfig {
    /// Category filter built from the configured exclusions
    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::excluding(self.route.avoid.iter().copied())
    }

    /// Reject values the finders cannot work with
    pub fn validate(&self) -> Result<()> {
        if !self.search.tie_epsilon.is_finite() || self.search.tie_epsilon < 0.0 {
            crate::bail_invalid!("search.tie_epsilon", self.search.tie_epsilon);
        }
        if self.search.tied_iteration_factor == 0 {
            crate::bail_invalid!("search.tied_iteration_factor", 0);
        }
        if self.search.spur_iteration_factor == 0 {
            crate::bail_invalid!("search.spur_iteration_factor", 0);
        }
        if self.route.max_routes == 0 {
            crate::bail_invalid!("route.max_routes", 0);
        }
        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoteiError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
