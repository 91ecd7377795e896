//! Positions and the deterministic fallback grid.

use serde::{Deserialize, Serialize};

/// Top-left corner of a node on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Row-major grid used for nodes without a stored position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridLayout {
    /// Nodes per row. Zero is treated as one.
    pub columns: usize,
    pub column_spacing: f64,
    pub row_spacing: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            column_spacing: 320.0,
            row_spacing: 260.0,
        }
    }
}

impl GridLayout {
    /// Position of the `index`-th node.
    pub fn slot(&self, index: usize) -> Position {
        let columns = self.columns.max(1);
        let column = index % columns;
        let row = index / columns;
        Position::new(
            column as f64 * self.column_spacing,
            row as f64 * self.row_spacing,
        )
    }
}
