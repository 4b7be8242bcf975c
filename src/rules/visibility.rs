//! Visibility rules
//!
//! Line-of-sight scans along rows: how many buildings can be seen from one
//! end of a line, and whether that count matches the border hints.

use crate::board::{reverse_line, Board, NO_HINT};

/// Count the buildings visible from the left end of an interior height
/// sequence.
///
/// A building is visible when every building before it is strictly lower;
/// the first one is always visible. Heights compare by character order,
/// which for the digit alphabet '1'..'9' is numeric order.
fn count_visible(interior: &str) -> usize {
    let mut tallest: Option<char> = None;
    let mut visible = 0;
    for cell in interior.chars() {
        if tallest.is_none_or(|t| cell > t) {
            visible += 1;
            tallest = Some(cell);
        }
    }
    visible
}

/// Check that exactly `pivot` buildings are visible from the left end of a
/// hinted line.
///
/// The first and last characters are the border hint cells and are trimmed
/// before counting. A pivot no count can reach simply yields `false`.
pub fn left_to_right_check(line: &str, pivot: usize) -> bool {
    let cells: Vec<char> = line.chars().collect();
    if cells.len() < 2 {
        return false;
    }
    let interior: String = cells[1..cells.len() - 1].iter().collect();
    count_visible(&interior) == pivot
}

/// Numeric value of a border hint cell, `None` for the no-hint marker.
pub(crate) fn hint_value(cell: char) -> Option<usize> {
    if cell == NO_HINT {
        return None;
    }
    cell.to_digit(10).map(|d| d as usize)
}

/// Check one interior row against its left and right border hints.
///
/// A no-hint marker leaves that side unconstrained; the right-hand hint is
/// checked by reversing the row and rerunning the left-to-right scan.
pub(crate) fn row_satisfies_hints(row: &str) -> bool {
    let cells: Vec<char> = row.chars().collect();
    let (Some(&first), Some(&last)) = (cells.first(), cells.last()) else {
        return true;
    };
    if let Some(hint) = hint_value(first) {
        if !left_to_right_check(row, hint) {
            return false;
        }
    }
    if let Some(hint) = hint_value(last) {
        if !left_to_right_check(&reverse_line(row), hint) {
            return false;
        }
    }
    true
}

/// Check every interior row against its border hints, both directions.
///
/// Short-circuits on the first row that misses a hint.
pub fn check_horizontal_visibility(board: &Board) -> bool {
    board.interior_rows().iter().all(|row| row_satisfies_hints(row))
}
