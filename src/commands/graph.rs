//! Graph command
use rotei_core::catalog::Catalog;
use rotei_core::error::Result;
use rotei_core::format::format_distance;
use rotei_core::graph::CategoryFilter;

use crate::cli::{Cli, OutputFormat};

/// Execute the graph command
pub fn execute(cli: &Cli, catalog: &Catalog, filter: &CategoryFilter) -> Result<()> {
    let graph = catalog.graph(filter);

    match cli.format {
        OutputFormat::Json => {
            let avoid: Vec<String> = filter.excluded().map(|c| c.to_string()).collect();
            let output = serde_json::json!({
                "nodes": graph.node_count(),
                "edges": graph.edge_count(),
                "avoid": avoid,
                "categories": catalog.categories(),
                "adjacency": graph,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                let categories: Vec<String> =
                    catalog.categories().iter().map(|c| c.to_string()).collect();
                println!(
                    "{} points, {} roads (categories: {})",
                    graph.node_count(),
                    graph.edge_count(),
                    categories.join(", ")
                );
            }
            if graph.is_empty() {
                if !cli.quiet {
                    println!("No roads are available with the current road settings");
                }
                return Ok(());
            }
            for node in graph.nodes() {
                let neighbors: Vec<String> = graph
                    .neighbors(node)
                    .into_iter()
                    .flatten()
                    .map(|(id, w)| format!("{} ({})", id, format_distance(*w)))
                    .collect();
                let marker = if catalog.is_hidden(node) { " [hidden]" } else { "" };
                println!("{}{}: {}", node, marker, neighbors.join(", "));
            }
        }
    }

    Ok(())
}
