//! Run configuration for wgraph
//!
//! An optional `wgraph.toml` selects the Dijkstra source and the path target:
//!
//! ```toml
//! source = 0
//! target = 6
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{GraphError, Result};
use crate::graph::types::VertexId;

/// File name looked up in the working directory when no explicit path is given
pub const CONFIG_FILE: &str = "wgraph.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Vertex Dijkstra starts from
    pub source: VertexId,
    /// Vertex whose path from `source` is reconstructed
    pub target: VertexId,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            source: 0,
            target: 6,
        }
    }
}

impl RunConfig {
    /// Load configuration from an explicit TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| GraphError::io_operation("read config", path.display(), e))?;

        let config: RunConfig = toml::from_str(&content).map_err(|e| GraphError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), source = config.source, target = config.target, "config_loaded");
        Ok(config)
    }

    /// Resolve configuration: the explicit path if given, else `wgraph.toml`
    /// in `dir` if it exists, else defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate: PathBuf = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides on top of the file values
    pub fn with_overrides(mut self, source: Option<VertexId>, target: Option<VertexId>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(target) = target {
            self.target = target;
        }
        self
    }
}
