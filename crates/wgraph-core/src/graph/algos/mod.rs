//! Graph algorithm implementations
//!
//! - `dfs`: depth-first traversal
//! - `bfs`: breadth-first traversal
//! - `dijkstra`: single-source shortest paths

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::VertexId;

pub use bfs::{breadth_first, bft};
pub use dfs::{depth_first, dft};
pub use dijkstra::{dijkstra, ShortestPaths};

/// Which full-coverage traversal to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    #[default]
    DepthFirst,
    BreadthFirst,
}

impl TraversalOrder {
    /// Label used in human output
    pub fn label(&self) -> &'static str {
        match self {
            TraversalOrder::DepthFirst => "Depth First Traversal",
            TraversalOrder::BreadthFirst => "Breadth First Traversal",
        }
    }
}

impl FromStr for TraversalOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(TraversalOrder::DepthFirst),
            "bfs" | "breadth-first" => Ok(TraversalOrder::BreadthFirst),
            other => Err(GraphError::UsageError(format!(
                "unknown traversal order: {} (expected: dfs or bfs)",
                other
            ))),
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalOrder::DepthFirst => write!(f, "dfs"),
            TraversalOrder::BreadthFirst => write!(f, "bfs"),
        }
    }
}

/// Run a full-coverage traversal in the given order
pub fn traverse(provider: &dyn GraphProvider, order: TraversalOrder) -> Vec<VertexId> {
    match order {
        TraversalOrder::DepthFirst => dft(provider),
        TraversalOrder::BreadthFirst => bft(provider),
    }
}

/// Preconditions shared by the single-pass traversals
fn check_start(provider: &dyn GraphProvider, start: VertexId, visited: &[bool]) -> Result<()> {
    let vertex_count = provider.vertex_count();
    if start >= vertex_count {
        return Err(GraphError::VertexOutOfRange {
            vertex: start,
            vertex_count,
        });
    }
    if visited.len() != vertex_count {
        return Err(GraphError::UsageError(format!(
            "visited set has {} slots but the graph has {} vertices",
            visited.len(),
            vertex_count
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::AdjacencyList;

    #[test]
    fn test_traverse_dispatch() {
        let graph = AdjacencyList::from_edges(3, &[(0, 2, 1), (2, 1, 1), (0, 1, 1)]).unwrap();
        assert_eq!(traverse(&graph, TraversalOrder::DepthFirst), vec![0, 2, 1]);
        assert_eq!(traverse(&graph, TraversalOrder::BreadthFirst), vec![0, 2, 1]);
    }

    #[test]
    fn test_order_parse() {
        assert_eq!(
            "BFS".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::BreadthFirst
        );
        assert_eq!(
            "depth-first".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::DepthFirst
        );
        assert!("topo".parse::<TraversalOrder>().is_err());
    }

    #[test]
    fn test_visited_length_mismatch() {
        let graph = AdjacencyList::from_edges(3, &[]).unwrap();
        let mut visited = vec![false; 2];
        let err = breadth_first(&graph, 0, &mut visited).unwrap_err();
        assert_eq!(err.error_type(), "usage_error");
    }
}
