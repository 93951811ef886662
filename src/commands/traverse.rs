//! `wgraph traverse` - print a full depth-first or breadth-first traversal

use wgraph_core::error::Result;
use wgraph_core::graph::{traverse, AdjacencyList, TraversalOrder};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{human, json};

pub fn execute(cli: &Cli, graph: &AdjacencyList, order: TraversalOrder) -> Result<()> {
    let vertices = traverse(graph, order);
    tracing::debug!(%order, visited = vertices.len(), "traversal_complete");

    match cli.format {
        OutputFormat::Human => println!("{}", human::traversal(order, &vertices)),
        OutputFormat::Json => {
            let mut doc = json::Document::new();
            json::insert_traversal(&mut doc, order, &vertices);
            println!("{}", json::render(doc)?);
        }
    }
    Ok(())
}
