use std::path::PathBuf;

use thiserror::Error;

/// Problems with a maze or point-graph input file.
#[derive(Debug, Error, PartialEq)]
pub enum FixtureError {
    /// The maze has no open cell at all.
    #[error("maze contains no open cells")]
    NoOpenCells,

    /// A requested start or destination cell is a wall or out of bounds.
    #[error("cell {x},{y} is not an open floor cell")]
    BlockedCell { x: i32, y: i32 },

    /// A coordinate argument was not of the form `x,y`.
    #[error("invalid coordinate '{input}', expected x,y")]
    BadCoordinate { input: String },

    /// A link or route endpoint names a point that was never declared.
    #[error("unknown point name: {name}")]
    UnknownPoint { name: String },

    /// The point graph declares no points.
    #[error("point graph {path} declares no points")]
    EmptyPointGraph { path: PathBuf },
}
