//! Named 2D points joined by undirected links, loaded from JSON.
//!
//! ```json
//! {
//!   "points": { "A": [2, 3], "B": [1, 7] },
//!   "links": [["A", "B"]]
//! }
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path as FsPath;

use anyhow::{Context, Result};
use astar_lib::Graph;
use serde::Deserialize;

use crate::error::FixtureError;

#[derive(Debug, Deserialize)]
struct PointGraphFile {
    points: BTreeMap<String, [f64; 2]>,
    #[serde(default)]
    links: Vec<[String; 2]>,
}

/// Point graph whose nodes are point names.
#[derive(Debug, Clone, Default)]
pub struct PointGraph {
    positions: HashMap<String, (f64, f64)>,
    links: HashMap<String, Vec<String>>,
}

impl PointGraph {
    /// Load a point graph from a JSON file.
    pub fn load(path: &FsPath) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read point graph {}", path.display()))?;
        let file: PointGraphFile = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse point graph {}", path.display()))?;
        if file.points.is_empty() {
            return Err(FixtureError::EmptyPointGraph {
                path: path.to_path_buf(),
            }
            .into());
        }

        let mut graph = PointGraph::default();
        for (name, [x, y]) in file.points {
            graph.add_point(name, x, y);
        }
        for [a, b] in file.links {
            graph.link(&a, &b)?;
        }
        tracing::debug!(
            points = graph.positions.len(),
            file = %path.display(),
            "loaded point graph"
        );
        Ok(graph)
    }

    pub fn add_point(&mut self, name: impl Into<String>, x: f64, y: f64) {
        let name = name.into();
        self.links.entry(name.clone()).or_default();
        self.positions.insert(name, (x, y));
    }

    /// Join two declared points in both directions.
    pub fn link(&mut self, a: &str, b: &str) -> Result<(), FixtureError> {
        let a = self.require(a)?.to_string();
        let b = self.require(b)?.to_string();
        self.links.entry(a.clone()).or_default().push(b.clone());
        self.links.entry(b).or_default().push(a);
        Ok(())
    }

    /// Return `name` if it is a declared point.
    pub fn require<'a>(&self, name: &'a str) -> Result<&'a str, FixtureError> {
        if self.positions.contains_key(name) {
            Ok(name)
        } else {
            Err(FixtureError::UnknownPoint {
                name: name.to_string(),
            })
        }
    }

    pub fn position(&self, name: &str) -> Option<(f64, f64)> {
        self.positions.get(name).copied()
    }

    /// Euclidean distance between two declared points. Unknown names are
    /// treated as zero distance.
    pub fn distance(&self, a: &str, b: &str) -> f64 {
        match (self.position(a), self.position(b)) {
            (Some((ax, ay)), Some((bx, by))) => ((bx - ax).powi(2) + (by - ay).powi(2)).sqrt(),
            _ => 0.0,
        }
    }
}

impl Graph<String> for PointGraph {
    fn neighbours(&self, node: &String) -> Vec<String> {
        self.links.get(node).cloned().unwrap_or_default()
    }
}
