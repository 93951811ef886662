//! Human-readable output formatting

use wgraph_core::graph::{AdjacencyList, Cost, TraversalOrder, VertexId};

/// Marks the end of a neighbor list
pub const END_MARKER: &str = "nullptr";

/// One line per vertex: `i: (dest, weight) -> ... -> nullptr`
pub fn adjacency(graph: &AdjacencyList) -> String {
    let mut out = String::new();
    for (vertex, edges) in graph.iter() {
        out.push_str(&format!("{}: ", vertex));
        for edge in edges {
            out.push_str(&format!("({}, {}) -> ", edge.to, edge.weight));
        }
        out.push_str(END_MARKER);
        out.push('\n');
    }
    out
}

fn join_vertices(vertices: &[VertexId]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn traversal(order: TraversalOrder, vertices: &[VertexId]) -> String {
    format!("{}: {}", order.label(), join_vertices(vertices))
}

pub fn costs(source: VertexId, costs: &[Cost]) -> String {
    let values = costs
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("Smallest cost from vertex {}: {}", source, values)
}

pub fn path(from: VertexId, to: VertexId, vertices: &[VertexId]) -> String {
    let hops = vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("Path from {} to {}: {}", from, to, hops)
}
