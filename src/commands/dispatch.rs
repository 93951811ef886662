//! Command dispatch logic for wgraph
use std::env;
use std::io;
use std::time::Instant;

use wgraph_core::config::RunConfig;
use wgraph_core::error::Result;
use wgraph_core::graph::load_graph;
use wgraph_core::trace_time;

use crate::cli::{Cli, Commands};
use crate::commands::{costs, input, path, report, show, traverse};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir()?;
    let config = RunConfig::resolve(cli.config.as_deref(), &cwd)?;
    trace_time!(start, "resolve_config");

    let graph_path = input::resolve_graph_path(
        cli.file.as_deref(),
        &mut io::stdin().lock(),
        &mut io::stderr(),
    )?;
    let graph = load_graph(&graph_path)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_graph");

    match &cli.command {
        None => report::execute(cli, &graph, &config),

        Some(Commands::Report { source, target }) => {
            report::execute(cli, &graph, &config.with_overrides(*source, *target))
        }

        Some(Commands::Show) => show::execute(cli, &graph),

        Some(Commands::Traverse { order }) => traverse::execute(cli, &graph, *order),

        Some(Commands::Costs { source }) => {
            costs::execute(cli, &graph, source.unwrap_or(config.source))
        }

        Some(Commands::Path { source, target }) => path::execute(
            cli,
            &graph,
            source.unwrap_or(config.source),
            target.unwrap_or(config.target),
        ),
    }
}
