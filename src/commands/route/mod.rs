//! Route command
//!
//! Checks the requested points against the catalogue, builds the filtered
//! graph and prints the ranked routes.

mod human;
mod json;

use rotei_core::catalog::Catalog;
use rotei_core::config::EngineConfig;
use rotei_core::error::{Result, RoteiError};
use rotei_core::graph::{check_points, find_top_routes, CategoryFilter};

use super::dispatch::category_filter;
use crate::cli::{Cli, OutputFormat, RouteArgs};

/// Execute the route command
pub fn execute(
    cli: &Cli,
    catalog: &Catalog,
    config: &EngineConfig,
    args: &RouteArgs,
) -> Result<()> {
    let max_via = config.route.max_via_points;
    if args.via.len() > max_via {
        return Err(RoteiError::TooManyViaPoints {
            count: args.via.len(),
            max: max_via,
        });
    }

    let max_routes = args.max_routes.unwrap_or(config.route.max_routes);
    if max_routes == 0 {
        rotei_core::bail_usage!("--max-routes must be at least 1");
    }

    let points = args.points();
    for point in &points {
        if !catalog.is_selectable(point) {
            return Err(RoteiError::UnknownNode {
                name: point.to_string(),
            });
        }
    }

    let filter = category_filter(config, &args.avoid);
    let graph = catalog.graph(&filter);

    if let Err(e) = check_points(&graph, &points) {
        avoid_hint(cli, catalog, &filter);
        return Err(e);
    }

    let routes = find_top_routes(&points, max_routes, &graph, &config.search);
    if routes.is_empty() {
        avoid_hint(cli, catalog, &filter);
        return Err(RoteiError::NoRoute {
            from: args.from.clone(),
            to: args.to.clone(),
        });
    }

    tracing::debug!(
        groups = routes.len(),
        truncated = routes.truncated,
        "route command complete"
    );

    match cli.format {
        OutputFormat::Json => json::output_routes_json(catalog, &graph, args, &filter, &routes)?,
        OutputFormat::Human => human::output_routes_human(cli, catalog, &graph, args, &routes),
    }

    Ok(())
}

/// Suggest relaxing road settings when they may be what blocks the route
///
/// Only categories the catalogue actually uses are worth mentioning.
fn avoid_hint(cli: &Cli, catalog: &Catalog, filter: &CategoryFilter) {
    if cli.quiet || cli.format == OutputFormat::Json || filter.is_unrestricted() {
        return;
    }
    let present = catalog.categories();
    let avoided: Vec<String> = filter
        .excluded()
        .filter(|c| present.contains(c))
        .map(|c| c.to_string())
        .collect();
    if avoided.is_empty() {
        return;
    }
    eprintln!(
        "hint: {} roads are avoided; a route may exist without --avoid",
        avoided.join(", ")
    );
}
