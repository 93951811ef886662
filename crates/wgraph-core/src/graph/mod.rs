//! Weighted directed graph and its algorithms
//!
//! - `types`: adjacency-list storage, edges, costs
//! - `loader`: text grammar parser
//! - `algos`: depth-first, breadth-first and Dijkstra
//! - `path`: path reconstruction from a predecessor table
//! - `traversal`: read-only provider trait the algorithms consume

pub mod algos;
pub mod loader;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{
    breadth_first, bft, depth_first, dft, dijkstra, traverse, ShortestPaths, TraversalOrder,
};
pub use loader::{load_graph, parse_graph, parse_graph_from};
pub use path::reconstruct_path;
pub use traversal::GraphProvider;
pub use types::{AdjacencyList, Cost, Edge, GraphBuilder, VertexId, Weight, SENTINEL};
