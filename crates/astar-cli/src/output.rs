//! Output formatting for search results.
//!
//! Text output is meant for people; JSON output is a single object per run
//! so scripts can consume it.

use std::io::{self, Write};

use astar_lib::SearchStats;
use clap::ValueEnum;
use serde::Serialize;

use crate::maze::Cell;

/// Output format shared by all subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Result of solving a maze.
#[derive(Debug, Clone, Serialize)]
pub struct MazeReport {
    pub start: Cell,
    pub dest: Cell,
    pub path: Option<Vec<Cell>>,
    pub cost: Option<f64>,
    pub stats: SearchStats,
    #[serde(skip)]
    pub rendered: String,
}

/// Result of routing through a point graph.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    pub from: String,
    pub to: String,
    pub path: Option<Vec<String>>,
    pub cost: Option<f64>,
    pub stats: SearchStats,
}

pub fn write_maze_report<W: Write>(
    out: &mut W,
    report: &MazeReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Text => {
            writeln!(out, "{}", report.rendered)?;
            match (&report.path, report.cost) {
                (Some(path), Some(cost)) => writeln!(
                    out,
                    "Path from {} to {}: {} steps, cost {:.3}",
                    report.start,
                    report.dest,
                    path.len().saturating_sub(1),
                    cost
                ),
                _ => writeln!(out, "No path from {} to {}.", report.start, report.dest),
            }
        }
    }
}

pub fn write_graph_report<W: Write>(
    out: &mut W,
    report: &GraphReport,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Text => match (&report.path, report.cost) {
            (Some(path), Some(cost)) => {
                writeln!(out, "Route from {} to {}:", report.from, report.to)?;
                for (index, name) in path.iter().enumerate() {
                    writeln!(out, "{index}: {name}")?;
                }
                writeln!(out, "Total cost: {cost:.3}")
            }
            _ => writeln!(out, "No path found from {} to {}.", report.from, report.to),
        },
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}
