//! Path reconstruction from a predecessor table

use crate::error::{GraphError, Result};
use crate::graph::types::VertexId;

/// Walk the predecessor chain back from `end` to `start` and return the
/// vertices from `start` to `end`.
///
/// Fails with `NoPathExists` when the chain ends before reaching `start`,
/// points outside the table, or loops without reaching it.
pub fn reconstruct_path(
    predecessors: &[Option<VertexId>],
    start: VertexId,
    end: VertexId,
) -> Result<Vec<VertexId>> {
    let vertex_count = predecessors.len();
    for vertex in [start, end] {
        if vertex >= vertex_count {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count,
            });
        }
    }

    let no_path = || GraphError::NoPathExists {
        from: start,
        to: end,
    };

    let mut path = vec![end];
    let mut current = end;
    while current != start {
        // A simple path never has more vertices than the graph.
        if path.len() > vertex_count {
            return Err(no_path());
        }
        current = predecessors
            .get(current)
            .copied()
            .flatten()
            .ok_or_else(no_path)?;
        path.push(current);
    }

    path.reverse();
    Ok(path)
}
