//! CLI argument parsing for wgraph
//!
//! Global flags: --file, --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use wgraph_core::format::OutputFormat;
use wgraph_core::graph::{TraversalOrder, VertexId};

use parse::{parse_output_format, parse_traversal_order};

/// wgraph - weighted graph traversal and shortest paths
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file to load (prompted for when absent)
    #[arg(long, short, global = true, env = "WGRAPH_FILE")]
    pub file: Option<PathBuf>,

    /// Run configuration file (defaults to ./wgraph.toml when present)
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress error messages (exit code only)
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print adjacency list, traversals, costs and a path (the default)
    Report {
        /// Vertex to compute shortest paths from
        #[arg(long)]
        source: Option<VertexId>,

        /// Vertex to reconstruct the path to
        #[arg(long)]
        target: Option<VertexId>,
    },

    /// Print the adjacency list
    Show,

    /// Print a traversal covering every vertex
    Traverse {
        /// Traversal order (dfs or bfs)
        #[arg(long, short, default_value = "dfs", value_parser = parse_traversal_order)]
        order: TraversalOrder,
    },

    /// Print shortest-path costs from a source vertex
    Costs {
        /// Vertex to compute shortest paths from
        #[arg(long)]
        source: Option<VertexId>,
    },

    /// Print the shortest path between two vertices
    Path {
        /// Vertex the path starts at
        #[arg(long)]
        source: Option<VertexId>,

        /// Vertex the path ends at
        #[arg(long)]
        target: Option<VertexId>,
    },
}
