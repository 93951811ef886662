use serde::Serialize;

use crate::error::{GraphError, Result};
use crate::graph::path::reconstruct_path;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cost, VertexId};

/// Result of one Dijkstra run: per-vertex cost and predecessor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: VertexId,
    /// Least total weight from `source`; `Cost::INFINITE` when unreachable
    pub costs: Vec<Cost>,
    /// Previous vertex on a shortest path; `None` for the source and unreachable vertices
    pub predecessors: Vec<Option<VertexId>>,
    /// Number of vertices settled, the source included
    #[serde(skip)]
    pub finalized: usize,
}

impl ShortestPaths {
    pub fn cost(&self, vertex: VertexId) -> Option<Cost> {
        self.costs.get(vertex).copied()
    }

    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.cost(vertex).is_some_and(|c| c.is_finite())
    }

    /// Vertices on a shortest path from the run's source to `target`
    pub fn path_to(&self, target: VertexId) -> Result<Vec<VertexId>> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Relax every outgoing edge of `current`
fn relax(
    provider: &dyn GraphProvider,
    current: VertexId,
    costs: &mut [Cost],
    predecessors: &mut [Option<VertexId>],
) {
    let base = costs[current];
    for edge in provider.outbound_edges(current) {
        let candidate = base.add_weight(edge.weight);
        if candidate < costs[edge.to] {
            costs[edge.to] = candidate;
            predecessors[edge.to] = Some(current);
        }
    }
}

/// Cheapest unfinalized vertex with a finite cost. Linear scan, so ties go
/// to the lowest index.
fn select(costs: &[Cost], finalized: &[bool]) -> Option<VertexId> {
    let mut champion: Option<VertexId> = None;
    for (vertex, cost) in costs.iter().enumerate() {
        if finalized[vertex] || !cost.is_finite() {
            continue;
        }
        if champion.is_none_or(|c| *cost < costs[c]) {
            champion = Some(vertex);
        }
    }
    champion
}

/// Single-source shortest paths over non-negative weights.
///
/// Each round relaxes only the vertex finalized in the previous round, then
/// finalizes the cheapest remaining vertex. Stops after `vertex_count - 1`
/// rounds or as soon as every remaining vertex is unreachable. Negative
/// weights are not detected and give meaningless costs.
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
pub fn dijkstra(provider: &dyn GraphProvider, source: VertexId) -> Result<ShortestPaths> {
    let vertex_count = provider.vertex_count();
    if source >= vertex_count {
        return Err(GraphError::VertexOutOfRange {
            vertex: source,
            vertex_count,
        });
    }

    let mut costs = vec![Cost::INFINITE; vertex_count];
    let mut predecessors: Vec<Option<VertexId>> = vec![None; vertex_count];
    let mut finalized = vec![false; vertex_count];

    costs[source] = Cost::ZERO;
    finalized[source] = true;
    let mut settled = 1;
    let mut current = source;

    for _ in 1..vertex_count {
        relax(provider, current, &mut costs, &mut predecessors);

        match select(&costs, &finalized) {
            Some(next) => {
                finalized[next] = true;
                settled += 1;
                current = next;
            }
            None => {
                tracing::debug!(settled, "no reachable vertex left to finalize");
                break;
            }
        }
    }

    tracing::debug!(settled, "dijkstra_complete");

    Ok(ShortestPaths {
        source,
        costs,
        predecessors,
        finalized: settled,
    })
}
