//! Interactive graph file prompt

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use wgraph_core::bail_usage;
use wgraph_core::error::Result;

pub const PROMPT: &str = "Enter file name (graphData.txt or WgraphData.txt): ";

/// Use the given path, or ask for one on `input`, writing the prompt to `prompt_out`
pub fn resolve_graph_path<R: BufRead, W: Write>(
    explicit: Option<&Path>,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    write!(prompt_out, "{}", PROMPT)?;
    prompt_out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        bail_usage!("no graph file given");
    }

    tracing::debug!(file = name, "graph_file_from_prompt");
    Ok(PathBuf::from(name))
}
