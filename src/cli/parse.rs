use wgraph_core::format::OutputFormat;
use wgraph_core::graph::TraversalOrder;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse traversal order from string
pub fn parse_traversal_order(s: &str) -> std::result::Result<TraversalOrder, String> {
    s.parse::<TraversalOrder>().map_err(|e| e.to_string())
}
