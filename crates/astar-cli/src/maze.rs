//! Character floor plans used as implicit grid graphs.
//!
//! `' '` is open floor, every other character is a wall. Moves go to the four
//! orthogonal neighbours, so each step costs exactly one unit under the
//! Euclidean metric.

use std::fmt;
use std::str::FromStr;

use astar_lib::{Graph, Path};
use serde::Serialize;

use crate::error::FixtureError;

const OPEN: char = ' ';
const TRAIL: char = '.';

/// Grid coordinate; `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Cell {
    type Err = FixtureError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let bad = || FixtureError::BadCoordinate {
            input: input.to_string(),
        };
        let (x, y) = input.split_once(',').ok_or_else(bad)?;
        let x = x.trim().parse().map_err(|_| bad())?;
        let y = y.trim().parse().map_err(|_| bad())?;
        Ok(Self::new(x, y))
    }
}

/// Straight-line distance between two cells.
pub fn euclidean(a: &Cell, b: &Cell) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloorPlan {
    rows: Vec<Vec<char>>,
}

impl FloorPlan {
    /// Parse a floor plan, ignoring trailing blank lines. Rows may differ in
    /// length; cells past the end of a row are walls.
    pub fn parse(text: &str) -> Result<Self, FixtureError> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        while rows.last().is_some_and(|row| row.iter().all(|&c| c == OPEN)) {
            rows.pop();
        }

        let plan = Self { rows };
        if plan.open_cells().next().is_none() {
            return Err(FixtureError::NoOpenCells);
        }
        Ok(plan)
    }

    pub fn is_free_at(&self, cell: Cell) -> bool {
        self.get(cell) == Some(OPEN)
    }

    fn get(&self, cell: Cell) -> Option<char> {
        let x = usize::try_from(cell.x).ok()?;
        let y = usize::try_from(cell.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Check that `cell` is open floor.
    pub fn require_open(&self, cell: Cell) -> Result<Cell, FixtureError> {
        if self.is_free_at(cell) {
            Ok(cell)
        } else {
            Err(FixtureError::BlockedCell {
                x: cell.x,
                y: cell.y,
            })
        }
    }

    fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &c)| c == OPEN)
                .map(move |(x, _)| Cell::new(x as i32, y as i32))
        })
    }

    /// Open cell closest to the bottom-left corner: lowest row first, then
    /// leftmost column.
    pub fn bottom_left_open(&self) -> Option<Cell> {
        self.open_cells().max_by(|a, b| a.y.cmp(&b.y).then(b.x.cmp(&a.x)))
    }

    /// Open cell closest to the top-right corner: highest row first, then
    /// rightmost column.
    pub fn top_right_open(&self) -> Option<Cell> {
        self.open_cells().min_by(|a, b| a.y.cmp(&b.y).then(b.x.cmp(&a.x)))
    }

    /// Render the plan with every cell of `path` marked by `.`.
    pub fn render_with(&self, path: Option<&Path<Cell>>) -> String {
        let mut rows = self.rows.clone();
        for cell in path.into_iter().flatten() {
            if let Some(c) = rows
                .get_mut(cell.y as usize)
                .and_then(|row| row.get_mut(cell.x as usize))
            {
                *c = TRAIL;
            }
        }
        rows.iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Graph<Cell> for FloorPlan {
    fn neighbours(&self, cell: &Cell) -> Vec<Cell> {
        // North, east, south, west.
        [(0, -1), (1, 0), (0, 1), (-1, 0)]
            .into_iter()
            .map(|(dx, dy)| cell.offset(dx, dy))
            .filter(|&next| self.is_free_at(next))
            .collect()
    }
}
