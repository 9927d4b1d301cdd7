//! Master point and road catalogue
//!
//! The catalogue is the read-only input every graph is built from. It is
//! stored as TOML by default:
//!
//! ```toml
//! [[nodes]]
//! name = "Station"
//! x = 120.0
//! y = 80.0
//!
//! [[nodes]]
//! name = "J1"
//! hidden = true
//!
//! [[edges]]
//! from = "Station"
//! to = "J1"
//! distance = 2.5
//! category = "mountain"
//! ```
//!
//! A file with a `.json` extension is read as JSON with the same shape.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_catalog;
use crate::error::{Result, RoteiError};
use crate::graph::{CategoryFilter, Edge, Graph, RoadCategory};

/// A named point on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogNode {
    pub name: String,
    /// Map coordinates, kept for renderers
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    /// Junctions that routes may pass through but users cannot pick
    #[serde(default)]
    pub hidden: bool,
}

impl CatalogNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            x: 0.0,
            y: 0.0,
            hidden: false,
        }
    }
}

/// Points and roads of one map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub nodes: Vec<CatalogNode>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Catalog {
    /// Load and validate a catalogue file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RoteiError::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };
        tracing::debug!(
            path = %path.display(),
            nodes = catalog.nodes.len(),
            edges = catalog.edges.len(),
            "loaded catalogue"
        );
        Ok(catalog)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)
            .map_err(|e| RoteiError::invalid_catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Catalog =
            serde_json::from_str(content).map_err(|e| RoteiError::invalid_catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the invariants the graph builder relies on
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for node in &self.nodes {
            if node.name.is_empty() {
                bail_catalog!("node with an empty name");
            }
            if !names.insert(node.name.as_str()) {
                bail_catalog!("duplicate node '{}'", node.name);
            }
        }

        for edge in &self.edges {
            if !edge.distance.is_finite() || edge.distance < 0.0 {
                bail_catalog!(
                    "road {} - {} has invalid distance {}",
                    edge.from,
                    edge.to,
                    edge.distance
                );
            }
            if edge.from == edge.to {
                bail_catalog!("road from {} to itself", edge.from);
            }
            if !names.is_empty() {
                for end in [&edge.from, &edge.to] {
                    if !names.contains(end.as_str()) {
                        bail_catalog!(
                            "road {} - {} uses undeclared point '{}'",
                            edge.from,
                            edge.to,
                            end
                        );
                    }
                }
            }
        }
        Ok(())
    }

    pub fn node(&self, name: &str) -> Option<&CatalogNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn is_hidden(&self, name: &str) -> bool {
        self.node(name).is_some_and(|n| n.hidden)
    }

    /// Whether users may pick `name` as a start, end or via point
    ///
    /// A catalogue without a node list accepts any road endpoint.
    pub fn is_selectable(&self, name: &str) -> bool {
        if self.nodes.is_empty() {
            return self.edges.iter().any(|e| e.from == name || e.to == name);
        }
        self.node(name).is_some_and(|n| !n.hidden)
    }

    /// Selectable point names, in catalogue order
    pub fn selectable_nodes(&self) -> Vec<&str> {
        if self.nodes.is_empty() {
            let endpoints: BTreeSet<&str> = self
                .edges
                .iter()
                .flat_map(|e| [e.from.as_str(), e.to.as_str()])
                .collect();
            return endpoints.into_iter().collect();
        }
        self.nodes
            .iter()
            .filter(|n| !n.hidden)
            .map(|n| n.name.as_str())
            .collect()
    }

    /// Road categories present in the catalogue
    pub fn categories(&self) -> BTreeSet<RoadCategory> {
        self.edges.iter().map(|e| e.category).collect()
    }

    /// Build the road graph under `filter`
    pub fn graph(&self, filter: &CategoryFilter) -> Graph {
        Graph::build(&self.edges, filter)
    }
}
