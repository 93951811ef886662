use crate::graph::types::{AdjacencyList, Edge, VertexId};

/// Read-only view of a graph consumed by the traversal and path algorithms
pub trait GraphProvider {
    fn vertex_count(&self) -> usize;
    fn outbound_edges(&self, vertex: VertexId) -> &[Edge];
}

impl GraphProvider for AdjacencyList {
    fn vertex_count(&self) -> usize {
        AdjacencyList::vertex_count(self)
    }

    fn outbound_edges(&self, vertex: VertexId) -> &[Edge] {
        self.neighbors(vertex)
    }
}
