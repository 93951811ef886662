//! `wgraph path` - print the shortest path between two vertices

use wgraph_core::error::Result;
use wgraph_core::graph::{dijkstra, AdjacencyList, VertexId};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{human, json};

pub fn execute(cli: &Cli, graph: &AdjacencyList, source: VertexId, target: VertexId) -> Result<()> {
    graph.check_vertex(target)?;
    let vertices = dijkstra(graph, source)?.path_to(target)?;

    match cli.format {
        OutputFormat::Human => println!("{}", human::path(source, target, &vertices)),
        OutputFormat::Json => {
            let mut doc = json::Document::new();
            json::insert_path(&mut doc, source, target, &vertices);
            println!("{}", json::render(doc)?);
        }
    }
    Ok(())
}
