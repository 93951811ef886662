use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::VertexId;

/// Breadth-first pass from `start`, skipping vertices already in `visited`.
///
/// Vertices are marked when enqueued, never when dequeued, so no vertex
/// enters the queue twice.
pub fn breadth_first(
    provider: &dyn GraphProvider,
    start: VertexId,
    visited: &mut [bool],
) -> Result<Vec<VertexId>> {
    super::check_start(provider, start, visited)?;
    Ok(walk(provider, start, visited))
}

fn walk(provider: &dyn GraphProvider, start: VertexId, visited: &mut [bool]) -> Vec<VertexId> {
    let mut order = Vec::new();
    if visited[start] {
        return order;
    }

    let mut queue: VecDeque<VertexId> = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex);
        for edge in provider.outbound_edges(vertex) {
            if !visited[edge.to] {
                visited[edge.to] = true;
                queue.push_back(edge.to);
            }
        }
    }

    order
}

/// Breadth-first traversal of the whole graph, restarting from every
/// unvisited vertex in ascending order
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
pub fn bft(provider: &dyn GraphProvider) -> Vec<VertexId> {
    let vertex_count = provider.vertex_count();
    let mut visited = vec![false; vertex_count];
    let mut order = Vec::with_capacity(vertex_count);

    for vertex in 0..vertex_count {
        if !visited[vertex] {
            order.extend(walk(provider, vertex, &mut visited));
        }
    }

    order
}
