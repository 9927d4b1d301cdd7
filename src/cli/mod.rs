//! CLI argument parsing for rotei
//!
//! Global flags: --catalog, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use parse::{parse_category, parse_format};
pub use rotei_core::format::OutputFormat;
use rotei_core::graph::RoadCategory;

/// Rotei - road distances over a fixed map catalogue
#[derive(Parser, Debug)]
#[command(name = "rotei")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Map catalogue (TOML, or JSON with a .json extension)
    #[arg(
        long,
        global = true,
        env = "ROTEI_CATALOG",
        default_value = "rotei-map.toml"
    )]
    pub catalog: PathBuf,

    /// Engine configuration file
    #[arg(long, global = true, env = "ROTEI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the shortest routes between two points
    Route(RouteArgs),

    /// Show the road graph after category filtering
    Graph {
        /// Exclude roads of this category (can be repeated)
        #[arg(long, value_parser = parse_category, action = clap::ArgAction::Append)]
        avoid: Vec<RoadCategory>,
    },

    /// List the points that can be used in a route
    Nodes,
}

#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting point
    pub from: String,

    /// Destination point
    pub to: String,

    /// Visit this point on the way, in order (can be repeated)
    #[arg(long, action = clap::ArgAction::Append)]
    pub via: Vec<String>,

    /// Exclude roads of this category (can be repeated)
    #[arg(long, value_parser = parse_category, action = clap::ArgAction::Append)]
    pub avoid: Vec<RoadCategory>,

    /// Number of ranked routes to show (default from config)
    #[arg(long)]
    pub max_routes: Option<usize>,
}

impl RouteArgs {
    /// Start, via points and destination in travel order
    pub fn points(&self) -> Vec<&str> {
        std::iter::once(self.from.as_str())
            .chain(self.via.iter().map(String::as_str))
            .chain(std::iter::once(self.to.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_help() {
        let result = Cli::try_parse_from(["rotei", "--help"]);
        assert!(result.is_err()); // --help exits
    }

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from(["rotei", "route", "A", "D"]).unwrap();
        let Commands::Route(args) = cli.command else {
            panic!("Expected Route command");
        };
        assert_eq!(args.points(), vec!["A", "D"]);
        assert!(args.avoid.is_empty());
        assert_eq!(args.max_routes, None);
        assert_eq!(cli.format, OutputFormat::Human);
    }

    #[test]
    fn test_parse_route_with_options() {
        let cli = Cli::try_parse_from([
            "rotei",
            "route",
            "A",
            "D",
            "--via",
            "B",
            "--via",
            "C",
            "--avoid",
            "mountain",
            "--max-routes",
            "2",
            "--format",
            "json",
        ])
        .unwrap();
        let Commands::Route(args) = cli.command else {
            panic!("Expected Route command");
        };
        assert_eq!(args.points(), vec!["A", "B", "C", "D"]);
        assert_eq!(args.avoid, vec![RoadCategory::Mountain]);
        assert_eq!(args.max_routes, Some(2));
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        let result = Cli::try_parse_from(["rotei", "graph", "--avoid", "ferry"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["rotei", "nodes", "--catalog", "map.json", "--quiet"]).unwrap();
        assert_eq!(cli.catalog, PathBuf::from("map.json"));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Nodes));
    }
}
