//! Nodes command
use rotei_core::catalog::{Catalog, CatalogNode};
use rotei_core::error::Result;

use crate::cli::{Cli, OutputFormat};

/// Execute the nodes command
pub fn execute(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let names = catalog.selectable_nodes();

    match cli.format {
        OutputFormat::Json => {
            // edges-only catalogues have no declared nodes; report them at the origin
            let nodes: Vec<serde_json::Value> = names
                .iter()
                .map(|name| {
                    let node = catalog
                        .node(name)
                        .cloned()
                        .unwrap_or_else(|| CatalogNode::new(*name));
                    serde_json::json!({
                        "name": node.name,
                        "x": node.x,
                        "y": node.y,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&nodes)?);
        }
        OutputFormat::Human => {
            if names.is_empty() {
                if !cli.quiet {
                    println!("No points in catalogue");
                }
                return Ok(());
            }
            for name in names {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
