//! Output format handling for rotei
//!
//! Supports two output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//!
//! Also holds the text helpers shared by human output: distances, paths
//! with per-leg distances, and rank labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoteiError;
use crate::graph::{visible_legs, Distance, Graph, Path};

/// Output format for rotei commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = RoteiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(RoteiError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Distance for display: one decimal at most, no trailing `.0`
pub fn format_distance(distance: Distance) -> String {
    if distance.is_infinite() {
        return "unreachable".to_string();
    }
    let text = format!("{:.1}", distance);
    match text.strip_suffix(".0") {
        Some(whole) if whole == "-0" => "0".to_string(),
        Some(whole) => whole.to_string(),
        None => text,
    }
}

/// `A → (2) → B → (1.5) → C`, with hidden junctions folded into the leg
/// that crosses them
pub fn format_path_with_distances<F>(graph: &Graph, path: &Path, is_hidden: F) -> String
where
    F: Fn(&str) -> bool,
{
    let legs = visible_legs(graph, path, &is_hidden);
    let Some(first) = legs.first() else {
        return path
            .nodes()
            .iter()
            .find(|n| !is_hidden(n.as_str()))
            .or(path.nodes().first())
            .cloned()
            .unwrap_or_default();
    };

    let mut out = first.from.clone();
    for leg in &legs {
        out.push_str(&format!(" → ({}) → {}", format_distance(leg.distance), leg.to));
    }
    out
}

/// Label for the zero-based rank `index`
pub fn rank_label(index: usize) -> String {
    match index {
        0 => "shortest".to_string(),
        1 => "second".to_string(),
        2 => "third".to_string(),
        n => format!("#{}", n + 1),
    }
}
