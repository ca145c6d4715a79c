//! A* shortest-path search over caller-defined graphs.
//!
//! The crate owns only the search loop and the priority ordering of candidate
//! paths. Node identity, neighbour enumeration, edge costs and the heuristic
//! all come from the caller:
//!
//! - [`Graph`] - neighbour enumeration for a node type `N`
//! - [`Path`] - the non-empty node sequence returned by a search
//! - [`PriorityQueue`] - min-ordered frontier keyed by estimated total cost
//! - [`find_path`] / [`search`] - the search entry points
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use astar_lib::find_path;
//!
//! let mut graph: HashMap<char, Vec<char>> = HashMap::new();
//! graph.insert('a', vec!['b', 'c']);
//! graph.insert('b', vec!['d']);
//! graph.insert('c', vec!['d']);
//!
//! let unit = |_: &char, _: &char| 1.0;
//! let none = |_: &char, _: &char| 0.0;
//! let path = find_path(&graph, 'a', 'd', unit, none).expect("d is reachable");
//! assert_eq!(path.hop_count(), 2);
//! ```

#![deny(warnings)]

pub mod error;
pub mod graph;
pub mod path;
pub mod queue;
pub mod search;

pub use error::{Error, Result};
pub use graph::Graph;
pub use path::Path;
pub use queue::{Item, PriorityQueue};
pub use search::{find_path, search, SearchOutcome, SearchStats};
