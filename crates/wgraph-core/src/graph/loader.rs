//! Graph file loader
//!
//! Grammar (whitespace-delimited integers, line breaks carry no meaning):
//!
//! ```text
//! vertex_count
//! dest weight dest weight ... -999     <- vertex 0
//! -999                                 <- vertex 1, no outgoing edges
//! ...
//! ```

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::bail_malformed;
use crate::error::{GraphError, Result};
use crate::graph::types::{AdjacencyList, GraphBuilder, VertexId, Weight, SENTINEL};
use crate::trace_time;

/// Origin reported for text that did not come from a file
pub const INLINE_ORIGIN: &str = "<input>";

/// A parsed integer and the 1-based line it appeared on
#[derive(Debug, Clone, Copy)]
struct Token {
    value: i64,
    line: usize,
}

struct TokenStream<'a> {
    origin: &'a str,
    tokens: std::vec::IntoIter<Token>,
    last_line: usize,
}

impl<'a> TokenStream<'a> {
    fn tokenize(text: &str, origin: &'a str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut last_line = 1;

        for (idx, line) in text.lines().enumerate() {
            let line_no = idx + 1;
            last_line = line_no;
            for word in line.split_whitespace() {
                let value = word.parse::<i64>().map_err(|_| {
                    GraphError::malformed(origin, line_no, format!("expected integer, found '{}'", word))
                })?;
                tokens.push(Token {
                    value,
                    line: line_no,
                });
            }
        }

        Ok(Self {
            origin,
            tokens: tokens.into_iter(),
            last_line,
        })
    }

    /// Next token, or a malformed error describing what was expected
    fn expect(&mut self, what: &str) -> Result<Token> {
        match self.tokens.next() {
            Some(token) => Ok(token),
            None => Err(GraphError::malformed(
                self.origin,
                self.last_line,
                format!("unexpected end of input, expected {}", what),
            )),
        }
    }
}

/// Parse graph text that did not come from a file
pub fn parse_graph(text: &str) -> Result<AdjacencyList> {
    parse_graph_from(text, INLINE_ORIGIN)
}

/// Parse graph text, naming `origin` in any error
pub fn parse_graph_from(text: &str, origin: &str) -> Result<AdjacencyList> {
    let mut stream = TokenStream::tokenize(text, origin)?;

    let count = stream.expect("vertex count")?;
    if count.value <= 0 {
        bail_malformed!(
            origin,
            count.line,
            format!("vertex count must be positive, found {}", count.value)
        );
    }
    let vertex_count = usize::try_from(count.value).map_err(|_| {
        GraphError::malformed(origin, count.line, "vertex count does not fit in memory")
    })?;

    // Every vertex needs at least its own sentinel token.
    if vertex_count > stream.tokens.len() {
        bail_malformed!(
            origin,
            stream.last_line,
            format!(
                "declared {} vertices but only {} tokens follow",
                vertex_count,
                stream.tokens.len()
            )
        );
    }

    let mut builder = GraphBuilder::new(vertex_count);
    for vertex in 0..vertex_count {
        read_neighbor_list(&mut stream, &mut builder, vertex, vertex_count)?;
    }

    if let Some(extra) = stream.tokens.next() {
        bail_malformed!(
            origin,
            extra.line,
            format!(
                "unexpected token {} after the neighbor list of the last vertex",
                extra.value
            )
        );
    }

    Ok(builder.build())
}

fn read_neighbor_list(
    stream: &mut TokenStream<'_>,
    builder: &mut GraphBuilder,
    vertex: VertexId,
    vertex_count: usize,
) -> Result<()> {
    let origin = stream.origin;
    loop {
        let dest = stream.expect(&format!("destination or -999 for vertex {}", vertex))?;
        if dest.value == SENTINEL {
            return Ok(());
        }

        let to = match usize::try_from(dest.value) {
            Ok(to) if to < vertex_count => to,
            _ => bail_malformed!(
                origin,
                dest.line,
                format!(
                    "destination {} of vertex {} is out of range 0..{}",
                    dest.value, vertex, vertex_count
                )
            ),
        };

        let weight = stream.expect(&format!("weight for edge {} -> {}", vertex, to))?;
        let Ok(weight_value) = Weight::try_from(weight.value) else {
            bail_malformed!(
                origin,
                weight.line,
                format!(
                    "weight {} of edge {} -> {} does not fit in 32 bits",
                    weight.value, vertex, to
                )
            );
        };
        builder.add_edge(vertex, to, weight_value)?;
    }
}

/// Read and parse a graph file
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_graph(path: &Path) -> Result<AdjacencyList> {
    let start = Instant::now();

    let text = fs::read_to_string(path)
        .map_err(|e| GraphError::io_operation("read graph file", path.display(), e))?;
    let graph = parse_graph_from(&text, &path.display().to_string())?;

    tracing::debug!(
        vertex_count = graph.vertex_count(),
        edge_count = graph.edge_count(),
        "graph_loaded"
    );
    trace_time!(start, "load_graph");

    Ok(graph)
}
