//! Test graphs shared by the integration tests.
//!
//! Graph construction is caller-side work, so the helpers live here rather
//! than in the library.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use astar_lib::Graph;

/// 2D integer point used as a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

pub const fn pt(x: i32, y: i32) -> Point {
    Point { x, y }
}

/// Euclidean distance, used both as cost and as heuristic.
pub fn distance(a: &Point, b: &Point) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}

pub fn no_estimate(_: &Point, _: &Point) -> f64 {
    0.0
}

/// Undirected adjacency list.
#[derive(Debug, Default, Clone)]
pub struct LinkGraph {
    links: HashMap<Point, Vec<Point>>,
}

impl LinkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(mut self, a: Point, b: Point) -> Self {
        self.links.entry(a).or_default().push(b);
        self.links.entry(b).or_default().push(a);
        self
    }
}

impl Graph<Point> for LinkGraph {
    fn neighbours(&self, node: &Point) -> Vec<Point> {
        self.links.get(node).cloned().unwrap_or_default()
    }
}

/// Character grid where `' '` is open floor and anything else is a wall.
#[derive(Debug, Clone)]
pub struct FloorPlan {
    rows: Vec<Vec<char>>,
}

impl FloorPlan {
    pub fn parse(text: &str) -> Self {
        Self {
            rows: text.lines().map(|line| line.chars().collect()).collect(),
        }
    }

    pub fn is_free_at(&self, p: Point) -> bool {
        if p.x < 0 || p.y < 0 {
            return false;
        }
        self.rows
            .get(p.y as usize)
            .and_then(|row| row.get(p.x as usize))
            .is_some_and(|&cell| cell == ' ')
    }

    pub fn put(&mut self, p: Point, mark: char) {
        self.rows[p.y as usize][p.x as usize] = mark;
    }

    pub fn render(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Graph<Point> for FloorPlan {
    fn neighbours(&self, p: &Point) -> Vec<Point> {
        // North, east, south, west.
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .into_iter()
            .map(|(dx, dy)| pt(p.x + dx, p.y + dy))
            .filter(|q| self.is_free_at(*q))
            .collect()
    }
}

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// The 15x15 maze from `docs/fixtures/maze.txt`.
pub fn fixture_maze() -> FloorPlan {
    let text =
        fs::read_to_string(fixtures_dir().join("maze.txt")).expect("maze fixture present");
    FloorPlan::parse(&text)
}
