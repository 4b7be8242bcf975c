//! Validation Engine
//!
//! Diagnostic reporting on top of the boolean rule predicates: which rule
//! failed, on which row or column, collected without short-circuiting so a
//! caller sees every violation at once.

use serde::Serialize;

use crate::board::{reverse_line, Board, UNKNOWN};
use crate::rules::rows::has_duplicate_height;
use crate::rules::visibility::{hint_value, left_to_right_check};

/// The board rule a diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    RowVisibility,
    RowUniqueness,
    ColumnVisibility,
    ColumnUniqueness,
    Completeness,
}

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A diagnostic for one rule violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub rule: Rule,
    /// Row index on the original board for row rules, column index for
    /// column rules. Both count from 0 including the hint border.
    pub index: usize,
    pub message: String,
    pub severity: Severity,
}

/// Result of validating a board.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add_error(&mut self, rule: Rule, index: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            rule,
            index,
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, rule: Rule, index: usize, message: String) {
        self.diagnostics.push(Diagnostic {
            rule,
            index,
            message,
            severity: Severity::Warning,
        });
    }

    /// True when no diagnostic is an error. Unfilled cells are warnings, so
    /// a partial board that breaks no rule still counts as consistent here;
    /// the strict all-or-nothing verdict is `rules::check_board`.
    pub fn is_valid(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Which orientation a line scan is reporting on.
#[derive(Debug, Clone, Copy)]
enum Orientation {
    Row,
    Column,
}

/// Validate an entire board, reporting every violated rule instance.
///
/// Rows are scanned on the board as given, columns by scanning the rotated
/// board with the same per-line logic. Unknown cells produce completeness
/// warnings rather than errors.
pub fn validate_board(board: &Board) -> ValidationResult {
    let mut result = ValidationResult::new();

    validate_lines(board, Orientation::Row, &mut result);
    validate_lines(&board.rotate(), Orientation::Column, &mut result);

    for (index, row) in board.rows().iter().enumerate() {
        if row.contains(UNKNOWN) {
            result.add_warning(
                Rule::Completeness,
                index,
                format!("row {index} has unfilled cells"),
            );
        }
    }

    result
}

/// Scan every interior line of `board` for hint and uniqueness violations.
///
/// For `Orientation::Column` the board passed in is the rotated one; line
/// indices are mapped back to column indices on the original board, and the
/// left/right hint ends read as top/bottom.
fn validate_lines(board: &Board, orientation: Orientation, result: &mut ValidationResult) {
    let n = board.size();
    for (offset, line) in board.interior_rows().iter().enumerate() {
        let line_index = offset + 1;
        let (label, index, near, far) = match orientation {
            Orientation::Row => ("row", line_index, "left", "right"),
            Orientation::Column => ("column", n - 1 - line_index, "top", "bottom"),
        };
        let (visibility, uniqueness) = match orientation {
            Orientation::Row => (Rule::RowVisibility, Rule::RowUniqueness),
            Orientation::Column => (Rule::ColumnVisibility, Rule::ColumnUniqueness),
        };

        let cells: Vec<char> = line.chars().collect();
        if let Some(hint) = cells.first().copied().and_then(hint_value) {
            if !left_to_right_check(line, hint) {
                result.add_error(
                    visibility,
                    index,
                    format!("{label} {index}: {hint} buildings should be visible from the {near}"),
                );
            }
        }
        if let Some(hint) = cells.last().copied().and_then(hint_value) {
            if !left_to_right_check(&reverse_line(line), hint) {
                result.add_error(
                    visibility,
                    index,
                    format!("{label} {index}: {hint} buildings should be visible from the {far}"),
                );
            }
        }
        if has_duplicate_height(line) {
            result.add_error(
                uniqueness,
                index,
                format!("{label} {index} repeats a building height"),
            );
        }
    }
}
