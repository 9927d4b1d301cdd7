use rotei_core::catalog::Catalog;
use rotei_core::format::{format_distance, format_path_with_distances, rank_label};
use rotei_core::graph::{Graph, RouteResultList};

use crate::cli::{Cli, RouteArgs};

/// Output ranked routes in human-readable format
pub fn output_routes_human(
    cli: &Cli,
    catalog: &Catalog,
    graph: &Graph,
    args: &RouteArgs,
    routes: &RouteResultList,
) {
    let is_hidden = |name: &str| catalog.is_hidden(name);

    if !cli.quiet {
        if args.via.is_empty() {
            println!("{} → {}", args.from, args.to);
        } else {
            println!("{} → {} (via {})", args.from, args.to, args.via.join(", "));
        }
    }

    for (rank, group) in routes.groups.iter().enumerate() {
        println!("{}: {}", rank_label(rank), format_distance(group.distance));
        if group.paths.len() == 1 {
            println!("  {}", format_path_with_distances(graph, &group.paths[0], is_hidden));
            continue;
        }
        for (i, path) in group.paths.iter().enumerate() {
            println!(
                "  pattern {}: {}",
                i + 1,
                format_path_with_distances(graph, path, is_hidden)
            );
        }
    }

    if routes.truncated && !cli.quiet {
        let reason = routes
            .truncation_reason
            .map(|r| r.to_string())
            .unwrap_or_default();
        println!("note: search stopped early ({}); more routes may exist", reason);
    }
}
