//! Row occupancy rules
//!
//! Duplicate-height detection within interior rows and the finished-board
//! scan for unknown cells.

use crate::board::{Board, UNKNOWN};

/// Check that the board has no unknown cells left.
///
/// Every row is scanned, hint rows included; the unknown marker can only
/// legally appear in the interior but the scan is unconditional.
pub fn check_not_finished_board(board: &Board) -> bool {
    board.rows().iter().all(|row| !row.contains(UNKNOWN))
}

/// True when the interior segment of an interior row repeats a height.
///
/// Unknown cells are exempt: two unfilled cells say nothing about heights
/// yet and do not count as a duplicate.
pub(crate) fn has_duplicate_height(row: &str) -> bool {
    let cells: Vec<char> = row.chars().collect();
    if cells.len() < 3 {
        return false;
    }
    let mut seen = [false; 10];
    for &cell in &cells[1..cells.len() - 1] {
        if cell == UNKNOWN {
            continue;
        }
        if let Some(height) = cell.to_digit(10) {
            if seen[height as usize] {
                return true;
            }
            seen[height as usize] = true;
        }
    }
    false
}

/// Check that no interior row repeats a building height in its interior
/// segment. Reports `false` on the first duplicate found.
pub fn check_uniqueness_in_rows(board: &Board) -> bool {
    board.interior_rows().iter().all(|row| !has_duplicate_height(row))
}
