//! `wgraph show` - print the adjacency list

use wgraph_core::error::Result;
use wgraph_core::graph::AdjacencyList;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{human, json};

pub fn execute(cli: &Cli, graph: &AdjacencyList) -> Result<()> {
    match cli.format {
        OutputFormat::Human => print!("{}", human::adjacency(graph)),
        OutputFormat::Json => {
            let mut doc = json::Document::new();
            json::insert_adjacency(&mut doc, graph);
            println!("{}", json::render(doc)?);
        }
    }
    Ok(())
}
