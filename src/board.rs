//! Board snapshots and the grids they print as.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tile value of the blank cell.
pub const BLANK: u32 = 0;

/// A snapshot of a sliding-tile puzzle grid.
///
/// Rows are kept exactly as given. Ragged rows or unexpected tile counts are
/// not rejected; they simply print with fewer or more values per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardState {
    rows: Vec<Vec<u32>>,
}

impl BoardState {
    pub fn new(rows: Vec<Vec<u32>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u32>] {
        &self.rows
    }

    /// Rows rendered as space separated values, one string per row.
    pub fn row_strings(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| {
            row.iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Position of the first blank tile as `(row, col)`.
    pub fn blank_position(&self) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&v| v == BLANK).map(|c| (r, c))
        })
    }

    /// Draw the grid inside ASCII box borders, the blank shown as a space.
    ///
    /// The border is sized to the widest row and widest value.
    pub fn boxed(&self) -> String {
        let cols = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        let cell_width = self
            .rows
            .iter()
            .flatten()
            .map(|v| v.to_string().len())
            .max()
            .unwrap_or(1);

        let border = format!("+{}", format!("{}+", "-".repeat(cell_width + 2)).repeat(cols));

        let mut output = String::new();
        for row in &self.rows {
            output.push_str(&border);
            output.push('\n');
            output.push('|');
            for value in row {
                let cell = if *value == BLANK {
                    String::new()
                } else {
                    value.to_string()
                };
                output.push_str(&format!(" {:>width$} |", cell, width = cell_width));
            }
            output.push('\n');
        }
        output.push_str(&border);
        output.push('\n');
        output
    }
}

impl From<Vec<Vec<u32>>> for BoardState {
    fn from(rows: Vec<Vec<u32>>) -> Self {
        Self::new(rows)
    }
}

impl<const R: usize, const C: usize> From<[[u32; C]; R]> for BoardState {
    fn from(grid: [[u32; C]; R]) -> Self {
        Self::new(grid.iter().map(|row| row.to_vec()).collect())
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_strings().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// The seven-state 3x3 walk used when no input is given.
///
/// Each state swaps the blank with one neighbour of its predecessor.
pub fn example_path() -> Vec<BoardState> {
    vec![
        [[1, 2, 3], [4, 0, 5], [6, 7, 8]].into(),
        [[1, 2, 3], [4, 7, 5], [6, 0, 8]].into(),
        [[1, 2, 3], [4, 7, 5], [6, 8, 0]].into(),
        [[1, 2, 3], [4, 7, 0], [6, 8, 5]].into(),
        [[1, 2, 3], [4, 0, 7], [6, 8, 5]].into(),
        [[1, 2, 3], [0, 4, 7], [6, 8, 5]].into(),
        [[1, 0, 3], [4, 2, 7], [6, 8, 5]].into(),
    ]
}
