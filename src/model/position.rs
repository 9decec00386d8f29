use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell identifying one spot on the hangar floor.
///
/// Identity is the coordinate alone; whether a cell is a maintenance bay,
/// and of which kind, is recorded by the instance's bay lists. Ordering is
/// row-major `(row, col)`, which is the order in which the solver scans
/// candidate positions, so enumeration order depends on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Taxi distance between two cells.
    pub fn manhattan_distance(&self, other: &Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Two cells are adjacent when they share an edge.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    pub(crate) fn in_grid(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The category of a maintenance bay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BayKind {
    Standard,
    Specialist,
}
