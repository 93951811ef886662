//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, serialization)
//! - 2: Usage error (bad flags/args, vertex outside the graph, bad config)
//! - 3: Data error (malformed graph input, unreachable path target)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::graph::types::VertexId;

/// Exit codes for the wgraph binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input, missing path (3)
    Data = 3,
}

/// Errors that can occur while loading a graph or running an algorithm
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("{0}")]
    UsageError(String),

    #[error("vertex {vertex} is out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Data errors (exit code 3)
    #[error("malformed graph input in {origin} at line {line}: {reason}")]
    MalformedGraphInput {
        origin: String,
        line: usize,
        reason: String,
    },

    #[error("no path exists from {from} to {to}")]
    NoPathExists { from: VertexId, to: VertexId },

    // Generic failures (exit code 1)
    #[error("failed to {operation} {target}: {reason}")]
    FailedOperation {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Create an error for malformed graph text
    pub fn malformed(origin: &str, line: usize, reason: impl std::fmt::Display) -> Self {
        GraphError::MalformedGraphInput {
            origin: origin.to_string(),
            line,
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        GraphError::FailedOperation {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_)
            | GraphError::VertexOutOfRange { .. }
            | GraphError::InvalidConfig { .. } => ExitCode::Usage,

            GraphError::MalformedGraphInput { .. } | GraphError::NoPathExists { .. } => {
                ExitCode::Data
            }

            GraphError::FailedOperation { .. } | GraphError::Io(_) | GraphError::Json(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::VertexOutOfRange { .. } => "vertex_out_of_range",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::MalformedGraphInput { .. } => "malformed_graph_input",
            GraphError::NoPathExists { .. } => "no_path_exists",
            GraphError::FailedOperation { .. } => "failed_operation",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for wgraph operations
pub type Result<T> = std::result::Result<T, GraphError>;
