//! JSON output formatting
//!
//! Each function inserts its section into a shared document so commands emit
//! only the keys they compute.

use serde_json::{json, Map, Value};
use wgraph_core::error::Result;
use wgraph_core::graph::{AdjacencyList, ShortestPaths, TraversalOrder, VertexId};

pub type Document = Map<String, Value>;

/// Pretty-printed document text
pub fn render(doc: Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Value::Object(doc))?)
}

pub fn insert_adjacency(doc: &mut Document, graph: &AdjacencyList) {
    let adjacency: Vec<Value> = graph
        .iter()
        .map(|(_, edges)| json!(edges))
        .collect();
    doc.insert("vertex_count".to_string(), json!(graph.vertex_count()));
    doc.insert("adjacency".to_string(), Value::Array(adjacency));
}

pub fn insert_traversal(doc: &mut Document, order: TraversalOrder, vertices: &[VertexId]) {
    let key = match order {
        TraversalOrder::DepthFirst => "depth_first",
        TraversalOrder::BreadthFirst => "breadth_first",
    };
    doc.insert(key.to_string(), json!(vertices));
}

pub fn insert_costs(doc: &mut Document, paths: &ShortestPaths) {
    doc.insert("source".to_string(), json!(paths.source));
    doc.insert("costs".to_string(), json!(paths.costs));
    doc.insert("predecessors".to_string(), json!(paths.predecessors));
}

pub fn insert_path(doc: &mut Document, from: VertexId, to: VertexId, vertices: &[VertexId]) {
    doc.insert(
        "path".to_string(),
        json!({
            "from": from,
            "to": to,
            "vertices": vertices,
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgraph_core::graph::dijkstra;

    #[test]
    fn test_adjacency_section() {
        let graph = AdjacencyList::from_edges(2, &[(0, 1, 3)]).unwrap();
        let mut doc = Document::new();
        insert_adjacency(&mut doc, &graph);

        assert_eq!(doc["vertex_count"], 2);
        assert_eq!(doc["adjacency"], json!([[{"to": 1, "weight": 3}], []]));
    }

    #[test]
    fn test_costs_section_uses_null_for_unreachable() {
        let graph = AdjacencyList::from_edges(3, &[(0, 1, 3)]).unwrap();
        let paths = dijkstra(&graph, 0).unwrap();
        let mut doc = Document::new();
        insert_costs(&mut doc, &paths);

        assert_eq!(doc["source"], 0);
        assert_eq!(doc["costs"], json!([0, 3, null]));
        assert_eq!(doc["predecessors"], json!([null, 0, null]));
    }

    #[test]
    fn test_traversal_keys() {
        let mut doc = Document::new();
        insert_traversal(&mut doc, TraversalOrder::DepthFirst, &[0, 1]);
        insert_traversal(&mut doc, TraversalOrder::BreadthFirst, &[1, 0]);
        assert_eq!(doc["depth_first"], json!([0, 1]));
        assert_eq!(doc["breadth_first"], json!([1, 0]));
    }
}
