//! `wgraph costs` - print Dijkstra costs from a source vertex

use wgraph_core::error::Result;
use wgraph_core::graph::{dijkstra, AdjacencyList, VertexId};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{human, json};

pub fn execute(cli: &Cli, graph: &AdjacencyList, source: VertexId) -> Result<()> {
    let paths = dijkstra(graph, source)?;

    match cli.format {
        OutputFormat::Human => println!("{}", human::costs(source, &paths.costs)),
        OutputFormat::Json => {
            let mut doc = json::Document::new();
            json::insert_costs(&mut doc, &paths);
            println!("{}", json::render(doc)?);
        }
    }
    Ok(())
}
