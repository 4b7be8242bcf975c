//! Square character grid for one Skyscrapers puzzle instance.
//!
//! Row 0 and row N-1 carry the top/bottom hints, column 0 and column N-1
//! the left/right hints; everything in between is a building height or an
//! unknown cell.

use thiserror::Error;

/// Border cell carrying no visibility hint.
pub const NO_HINT: char = '*';

/// Interior cell whose height is not yet filled in.
pub const UNKNOWN: char = '?';

/// Structural problems that make a grid unusable before any rule runs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("board is empty")]
    Empty,

    #[error("board has {size} rows, a hinted grid needs at least 3")]
    TooSmall { size: usize },

    #[error("row {row} has length {len}, expected {expected} for a square board")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Square character grid, border hints included.
///
/// Construction checks the shape invariant once; the rule predicates rely on
/// it and never re-validate. The grid is immutable, every transformation
/// returns a new board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<String>,
}

impl Board {
    /// Build a board from row strings, enforcing the square-grid invariant.
    pub fn from_rows(rows: Vec<String>) -> Result<Self, ShapeError> {
        if rows.is_empty() {
            return Err(ShapeError::Empty);
        }
        let expected = rows.len();
        if expected < 3 {
            return Err(ShapeError::TooSmall { size: expected });
        }
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != expected {
                return Err(ShapeError::NotSquare { row, len, expected });
            }
        }
        Ok(Self { rows })
    }

    /// Edge length of the square grid.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// All rows, hint rows included.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Single row by index, hint columns included.
    pub fn row(&self, index: usize) -> &str {
        &self.rows[index]
    }

    /// Rows holding buildings, i.e. everything but the top and bottom hint
    /// rows. Each still starts and ends with a left/right hint cell.
    pub fn interior_rows(&self) -> &[String] {
        &self.rows[1..self.rows.len() - 1]
    }

    /// Rotate the grid 90 degrees counter-clockwise.
    ///
    /// The old rightmost column becomes the new top row and the old top hint
    /// row becomes the new left hint column, so the row-oriented checks read
    /// the rotated board exactly as they read the original: scanning a
    /// rotated row left-to-right walks the original column top-to-bottom.
    ///
    /// Every output row is a fresh allocation built by index mapping
    /// `new[i][j] = old[j][n-1-i]`.
    pub fn rotate(&self) -> Board {
        let n = self.size();
        let cells: Vec<Vec<char>> = self.rows.iter().map(|r| r.chars().collect()).collect();
        let rows = (0..n)
            .map(|i| (0..n).map(|j| cells[j][n - 1 - i]).collect())
            .collect();
        Board { rows }
    }
}

/// Reverse a line so a right-to-left scan can reuse the left-to-right one.
pub fn reverse_line(line: &str) -> String {
    line.chars().rev().collect()
}
