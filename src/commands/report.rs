//! `wgraph report` - the full run: adjacency list, both traversals,
//! Dijkstra costs and one reconstructed path

use wgraph_core::config::RunConfig;
use wgraph_core::error::Result;
use wgraph_core::graph::{bft, dft, dijkstra, AdjacencyList, TraversalOrder};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{human, json};

pub fn execute(cli: &Cli, graph: &AdjacencyList, config: &RunConfig) -> Result<()> {
    match cli.format {
        OutputFormat::Human => execute_human(graph, config),
        OutputFormat::Json => execute_json(graph, config),
    }
}

/// Sections are printed as they are computed, so a failing path still shows
/// everything before it.
fn execute_human(graph: &AdjacencyList, config: &RunConfig) -> Result<()> {
    print!("{}", human::adjacency(graph));
    println!("{}", human::traversal(TraversalOrder::DepthFirst, &dft(graph)));
    println!("{}", human::traversal(TraversalOrder::BreadthFirst, &bft(graph)));

    let paths = dijkstra(graph, config.source)?;
    println!("{}", human::costs(config.source, &paths.costs));

    graph.check_vertex(config.target)?;
    let vertices = paths.path_to(config.target)?;
    println!("{}", human::path(config.source, config.target, &vertices));
    Ok(())
}

fn execute_json(graph: &AdjacencyList, config: &RunConfig) -> Result<()> {
    let mut doc = json::Document::new();
    json::insert_adjacency(&mut doc, graph);
    json::insert_traversal(&mut doc, TraversalOrder::DepthFirst, &dft(graph));
    json::insert_traversal(&mut doc, TraversalOrder::BreadthFirst, &bft(graph));

    let paths = dijkstra(graph, config.source)?;
    json::insert_costs(&mut doc, &paths);

    graph.check_vertex(config.target)?;
    let vertices = paths.path_to(config.target)?;
    json::insert_path(&mut doc, config.source, config.target, &vertices);

    println!("{}", json::render(doc)?);
    Ok(())
}
