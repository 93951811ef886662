use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{GraphError, Result};

/// Dense vertex index in `[0, vertex_count)`
pub type VertexId = usize;

/// Edge weight as read from the input. Path costs are summed in `i64`, so
/// no real path can grow large enough to collide with `Cost::INFINITE`.
pub type Weight = i32;

/// Token that terminates a vertex's neighbor list in the input grammar
pub const SENTINEL: i64 = -999;

/// An outgoing edge, owned by its source vertex's neighbor list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Weight,
}

/// Accumulated path cost.
/// `Cost::INFINITE` marks an unreachable vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(i64);

impl Cost {
    pub const ZERO: Cost = Cost(0);
    pub const INFINITE: Cost = Cost(i64::MAX);

    pub fn new(cost: i64) -> Self {
        Cost(cost)
    }

    /// The finite value, or `None` for unreachable
    pub fn value(&self) -> Option<i64> {
        self.is_finite().then_some(self.0)
    }

    pub fn is_finite(&self) -> bool {
        *self != Cost::INFINITE
    }

    /// Extend this cost by one edge. Infinite stays infinite.
    pub fn add_weight(self, weight: Weight) -> Cost {
        if self.is_finite() {
            Cost(self.0.saturating_add(i64::from(weight)))
        } else {
            self
        }
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "inf"),
        }
    }
}

impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Weighted directed graph stored as one neighbor list per vertex.
///
/// Built once through [`GraphBuilder`]; no mutating methods are exposed
/// afterwards. Every edge destination is a valid vertex index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    lists: Vec<Vec<Edge>>,
}

impl AdjacencyList {
    /// Build a graph from `(from, to, weight)` triples, in insertion order
    pub fn from_edges(vertex_count: usize, edges: &[(VertexId, VertexId, Weight)]) -> Result<Self> {
        let mut builder = GraphBuilder::new(vertex_count);
        for &(from, to, weight) in edges {
            builder.add_edge(from, to, weight)?;
        }
        Ok(builder.build())
    }

    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        vertex < self.lists.len()
    }

    /// Outgoing edges of `vertex` in insertion order (empty if out of range)
    pub fn neighbors(&self, vertex: VertexId) -> &[Edge] {
        self.lists.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(vertex, neighbors)` in vertex order
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &[Edge])> {
        self.lists.iter().enumerate().map(|(v, l)| (v, l.as_slice()))
    }

    /// Validate that `vertex` exists
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Render the graph in the input grammar: the vertex count on the first
    /// line, then one line per vertex of `dest weight` pairs ending in `-999`.
    pub fn to_grammar(&self) -> String {
        let mut out = format!("{}\n", self.vertex_count());
        for (_, edges) in self.iter() {
            for edge in edges {
                out.push_str(&format!("{} {} ", edge.to, edge.weight));
            }
            out.push_str(&format!("{}\n", SENTINEL));
        }
        out
    }
}

/// Load-time construction of an [`AdjacencyList`]
#[derive(Debug)]
pub struct GraphBuilder {
    lists: Vec<Vec<Edge>>,
}

impl GraphBuilder {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            lists: vec![Vec::new(); vertex_count],
        }
    }

    /// Append an edge to `from`'s list. Parallel edges are kept.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> Result<()> {
        let vertex_count = self.lists.len();
        for vertex in [from, to] {
            if vertex >= vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count,
                });
            }
        }
        self.lists[from].push(Edge { to, weight });
        Ok(())
    }

    pub fn build(self) -> AdjacencyList {
        AdjacencyList { lists: self.lists }
    }
}
