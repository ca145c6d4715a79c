//! Command-line tooling around `astar-lib`.
//!
//! Everything graph-shaped in here (floor-plan mazes, named point graphs) is
//! caller-side scaffolding that feeds the library's search engine.

pub mod commands;
pub mod error;
pub mod maze;
pub mod output;
pub mod points;

pub use error::FixtureError;
pub use output::OutputFormat;
