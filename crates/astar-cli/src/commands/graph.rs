//! Graph command handler: route between two named points.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use astar_lib::search;

use crate::output::{write_graph_report, GraphReport, OutputFormat};
use crate::points::PointGraph;

/// Arguments for the graph command.
#[derive(Debug, Clone)]
pub struct GraphCommandArgs {
    /// Point-graph JSON file.
    pub file: PathBuf,
    /// Starting point name.
    pub from: String,
    /// Destination point name.
    pub to: String,
}

/// Route through the point graph and build a report without printing it.
pub fn route_points(args: &GraphCommandArgs) -> Result<GraphReport> {
    let graph = PointGraph::load(&args.file)?;
    let from = graph.require(&args.from)?.to_string();
    let to = graph.require(&args.to)?.to_string();

    let distance = |a: &String, b: &String| graph.distance(a, b);
    let outcome = search(&graph, from.clone(), to.clone(), distance, distance);
    tracing::info!(
        from = %from,
        to = %to,
        found = outcome.is_found(),
        expanded = outcome.stats.expanded,
        "point graph search finished"
    );

    let cost = outcome.path.as_ref().map(|path| path.cost(distance));
    Ok(GraphReport {
        from,
        to,
        path: outcome.path.map(|path| path.into_nodes()),
        cost,
        stats: outcome.stats,
    })
}

/// Handle the graph subcommand.
pub fn handle_graph_command<W: Write>(
    out: &mut W,
    args: &GraphCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let report = route_points(args)?;
    write_graph_report(out, &report, format).context("failed to write route report")
}
