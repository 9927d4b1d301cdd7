use rotei_core::catalog::Catalog;
use rotei_core::error::Result;
use rotei_core::format::rank_label;
use rotei_core::graph::{visible_legs, CategoryFilter, Graph, RouteResultList};

use crate::cli::RouteArgs;

/// Output ranked routes in JSON format
pub fn output_routes_json(
    catalog: &Catalog,
    graph: &Graph,
    args: &RouteArgs,
    filter: &CategoryFilter,
    routes: &RouteResultList,
) -> Result<()> {
    let ranked: Vec<serde_json::Value> = routes
        .groups
        .iter()
        .enumerate()
        .map(|(rank, group)| {
            let paths: Vec<serde_json::Value> = group
                .paths
                .iter()
                .map(|path| {
                    serde_json::json!({
                        "nodes": path,
                        "legs": visible_legs(graph, path, |n| catalog.is_hidden(n)),
                    })
                })
                .collect();
            serde_json::json!({
                "rank": rank + 1,
                "label": rank_label(rank),
                "distance": group.distance,
                "paths": paths,
            })
        })
        .collect();

    let avoid: Vec<String> = filter.excluded().map(|c| c.to_string()).collect();
    let output = serde_json::json!({
        "from": args.from,
        "to": args.to,
        "via": args.via,
        "avoid": avoid,
        "routes": ranked,
        "truncated": routes.truncated,
        "truncation_reason": routes.truncation_reason,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
