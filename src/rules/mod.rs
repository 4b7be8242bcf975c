//! Board Rules
//!
//! The pure predicates behind the verdict: hint visibility, height
//! uniqueness, completeness, and their column-wise reuse through grid
//! rotation. No I/O and no logging here; every function is a plain
//! function of its input board.

pub mod rows;
pub mod visibility;

pub use rows::{check_not_finished_board, check_uniqueness_in_rows};
pub use visibility::{check_horizontal_visibility, left_to_right_check};

use crate::board::Board;

/// Check column-wise visibility and uniqueness.
///
/// Rotates the grid once so the row-oriented checks apply to what used to
/// be columns; there is no column-specific scan logic anywhere.
pub fn check_columns(board: &Board) -> bool {
    let rotated = board.rotate();
    check_horizontal_visibility(&rotated) && check_uniqueness_in_rows(&rotated)
}

/// Full verdict for one board: every rule holds and no cell is unknown.
pub fn check_board(board: &Board) -> bool {
    check_columns(board)
        && check_horizontal_visibility(board)
        && check_uniqueness_in_rows(board)
        && check_not_finished_board(board)
}
