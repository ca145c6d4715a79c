//! Maze command handler: solve a floor-plan file between two open cells.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};

use astar_lib::search;

use crate::error::FixtureError;
use crate::maze::{euclidean, Cell, FloorPlan};
use crate::output::{write_maze_report, MazeReport, OutputFormat};

/// Arguments for the maze command.
#[derive(Debug, Clone)]
pub struct MazeCommandArgs {
    /// Floor-plan file (`#` walls, spaces open).
    pub file: PathBuf,
    /// Start cell; defaults to the open cell nearest the bottom-left corner.
    pub start: Option<Cell>,
    /// Destination cell; defaults to the open cell nearest the top-right corner.
    pub dest: Option<Cell>,
}

/// Solve the maze and build a report without printing it.
pub fn solve_maze(args: &MazeCommandArgs) -> Result<MazeReport> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("failed to read maze {}", args.file.display()))?;
    let plan = FloorPlan::parse(&text)
        .with_context(|| format!("failed to parse maze {}", args.file.display()))?;

    let start = match args.start {
        Some(cell) => plan.require_open(cell)?,
        None => plan.bottom_left_open().ok_or(FixtureError::NoOpenCells)?,
    };
    let dest = match args.dest {
        Some(cell) => plan.require_open(cell)?,
        None => plan.top_right_open().ok_or(FixtureError::NoOpenCells)?,
    };

    let outcome = search(&plan, start, dest, euclidean, euclidean);
    tracing::info!(
        %start,
        %dest,
        found = outcome.is_found(),
        expanded = outcome.stats.expanded,
        "maze search finished"
    );

    let rendered = plan.render_with(outcome.path.as_ref());
    let cost = outcome.path.as_ref().map(|path| path.cost(euclidean));
    Ok(MazeReport {
        start,
        dest,
        path: outcome.path.map(|path| path.into_nodes()),
        cost,
        stats: outcome.stats,
        rendered,
    })
}

/// Handle the maze subcommand.
pub fn handle_maze_command<W: Write>(
    out: &mut W,
    args: &MazeCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let report = solve_maze(args)?;
    write_maze_report(out, &report, format).context("failed to write maze report")
}
