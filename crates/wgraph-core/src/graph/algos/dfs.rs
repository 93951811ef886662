use crate::error::Result;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::VertexId;

/// One frame of the explicit DFS stack: a vertex and the index of the next
/// edge of it to examine.
struct Frame {
    vertex: VertexId,
    next_edge: usize,
}

/// Depth-first pass from `start`, skipping vertices already in `visited`.
///
/// Neighbors are explored in stored edge order, so the sequence matches the
/// recursive formulation exactly. `visited` must have one slot per vertex
/// and is updated in place.
pub fn depth_first(
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

    visited[start] = true;
    order.push(start);
    let mut stack = vec![Frame {
        vertex: start,
        next_edge: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let edges = provider.outbound_edges(frame.vertex);
        match edges.get(frame.next_edge) {
            Some(edge) => {
                frame.next_edge += 1;
                if !visited[edge.to] {
                    visited[edge.to] = true;
                    order.push(edge.to);
                    stack.push(Frame {
                        vertex: edge.to,
                        next_edge: 0,
                    });
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    order
}

/// Depth-first traversal of the whole graph, restarting from every unvisited
/// vertex in ascending order
#[tracing::instrument(skip(provider), fields(vertex_count = provider.vertex_count()))]
pub fn dft(provider: &dyn GraphProvider) -> Vec<VertexId> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;
    use crate::graph::types::AdjacencyList;

    #[test]
    fn test_follows_insertion_order() {
        // 0 -> 2 is stored before 0 -> 1, so 2's subtree is explored first
        let graph =
            AdjacencyList::from_edges(4, &[(0, 2, 1), (0, 1, 1), (2, 3, 1), (1, 3, 1)]).unwrap();
        assert_eq!(dft(&graph), vec![0, 2, 3, 1]);
    }

    #[test]
    fn test_backtracks_to_pending_neighbors() {
        let graph = AdjacencyList::from_edges(
            6,
            &[(0, 1, 1), (0, 4, 1), (1, 2, 1), (1, 3, 1), (4, 5, 1), (3, 0, 1)],
        )
        .unwrap();
        assert_eq!(dft(&graph), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_disconnected_components() {
        let graph = AdjacencyList::from_edges(3, &[(0, 1, 1)]).unwrap();
        assert_eq!(dft(&graph), vec![0, 1, 2]);
    }

    #[test]
    fn test_later_component_reaches_earlier_one() {
        // 2 -> 0 but 0 was already visited by the first pass
        let graph = AdjacencyList::from_edges(3, &[(2, 0, 1), (2, 1, 1)]).unwrap();
        assert_eq!(dft(&graph), vec![0, 1, 2]);
    }

    #[test]
    fn test_self_loop_and_parallel_edges() {
        let graph = AdjacencyList::from_edges(2, &[(0, 0, 1), (0, 1, 1), (0, 1, 2)]).unwrap();
        assert_eq!(dft(&graph), vec![0, 1]);
    }

    #[test]
    fn test_single_pass_respects_visited() {
        let graph = AdjacencyList::from_edges(3, &[(0, 1, 1), (1, 2, 1)]).unwrap();
        let mut visited = vec![false, true, false];
        assert_eq!(depth_first(&graph, 0, &mut visited).unwrap(), vec![0]);
        assert_eq!(visited, vec![true, true, false]);
    }

    #[test]
    fn test_start_out_of_range() {
        let graph = AdjacencyList::from_edges(2, &[]).unwrap();
        let mut visited = vec![false; 2];
        let err = depth_first(&graph, 2, &mut visited).unwrap_err();
        assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 2, .. }));
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<_> = (0..n - 1).map(|v| (v, v + 1, 1)).collect();
        let graph = AdjacencyList::from_edges(n, &edges).unwrap();
        let order = dft(&graph);
        assert_eq!(order.len(), n);
        assert_eq!(order[n - 1], n - 1);
    }
}
