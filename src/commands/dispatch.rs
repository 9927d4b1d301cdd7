//! Command dispatch logic for rotei
use std::time::Instant;

use rotei_core::catalog::Catalog;
use rotei_core::config::EngineConfig;
use rotei_core::error::Result;
use rotei_core::graph::{CategoryFilter, RoadCategory};
use rotei_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    trace_time!(start, "load_config");

    let catalog = Catalog::load(&cli.catalog)?;
    trace_time!(start, "load_catalog", nodes = catalog.nodes.len());

    match &cli.command {
        Commands::Route(args) => commands::route::execute(cli, &catalog, &config, args),
        Commands::Graph { avoid } => {
            let filter = category_filter(&config, avoid);
            commands::graph::execute(cli, &catalog, &filter)
        }
        Commands::Nodes => commands::nodes::execute(cli, &catalog),
    }
}

fn load_config(cli: &Cli) -> Result<EngineConfig> {
    match &cli.config {
        Some(path) => EngineConfig::load(path),
        None => Ok(EngineConfig::default()),
    }
}

/// Config exclusions plus those given on the command line
pub fn category_filter(config: &EngineConfig, avoid: &[RoadCategory]) -> CategoryFilter {
    let mut filter = config.category_filter();
    for category in avoid {
        filter.exclude(*category);
    }
    filter
}
