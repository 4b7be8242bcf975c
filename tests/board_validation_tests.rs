use std::io::Write;

use skyscraper_check::board::Board;
use skyscraper_check::validation::{validate_board, Rule, Severity};
use skyscraper_check::{
    check_board, check_columns, check_horizontal_visibility, check_not_finished_board,
    check_uniqueness_in_rows, left_to_right_check, reader, ShapeError,
};

const GOOD: [&str; 7] = [
    "***21**", "412453*", "423145*", "*543215", "*35214*", "*41532*", "*2*1***",
];

fn board(rows: &[&str]) -> Board {
    Board::from_rows(rows.iter().map(|s| s.to_string()).collect()).expect("square board")
}

fn mutated(row: usize, replacement: &str) -> Board {
    let mut rows = GOOD.to_vec();
    rows[row] = replacement;
    board(&rows)
}

#[test]
fn test_known_good_board_passes_every_check() {
    let b = board(&GOOD);
    assert!(check_not_finished_board(&b));
    assert!(check_uniqueness_in_rows(&b));
    assert!(check_horizontal_visibility(&b));
    assert!(check_columns(&b));
    assert!(check_board(&b));
}

#[test]
fn test_mutated_row_breaks_row_checks() {
    let b = mutated(1, "452453*");
    assert!(!check_uniqueness_in_rows(&b));
    assert!(!check_horizontal_visibility(&b));
    assert!(!check_board(&b));
}

#[test]
fn test_right_hint_violation_breaks_horizontal_check() {
    let b = mutated(1, "452413*");
    assert!(!check_horizontal_visibility(&b));
}

#[test]
fn test_adjacent_duplicate_breaks_uniqueness() {
    let b = mutated(3, "*553215");
    assert!(!check_uniqueness_in_rows(&b));
}

#[test]
fn test_column_violations_break_column_check() {
    assert!(!check_columns(&mutated(5, "*41232*")));
    assert!(!check_columns(&mutated(1, "412553*")));
}

#[test]
fn test_unknown_cell_fails_completeness_only() {
    let b = mutated(3, "*5?3215");
    assert!(!check_not_finished_board(&b));
    assert!(!check_board(&b));
    // Uniqueness is still judged on the filled cells.
    assert!(check_uniqueness_in_rows(&b));
}

#[test]
fn test_visibility_examples() {
    assert!(left_to_right_check("412453*", 4));
    assert!(!left_to_right_check("452453*", 5));
}

#[test]
fn test_rotation_round_trip() {
    let b = board(&GOOD);
    assert_eq!(b.rotate().rotate().rotate().rotate(), b);
}

#[test]
fn test_rotation_moves_right_hints_to_top() {
    // The right hint column of the fixture is *,*,*,5,*,*,* top to bottom.
    let rotated = board(&GOOD).rotate();
    assert_eq!(rotated.row(0), "***5***");
}

#[test]
fn test_verdict_is_idempotent() {
    let b = board(&GOOD);
    assert_eq!(check_board(&b), check_board(&b));
    let bad = mutated(1, "452453*");
    assert_eq!(check_board(&bad), check_board(&bad));
}

#[test]
fn test_two_placeholders_are_not_duplicates() {
    let b = board(&["****", "*??*", "*12*", "****"]);
    assert!(check_uniqueness_in_rows(&b));
    assert!(check_columns(&b));
    assert!(!check_not_finished_board(&b));
}

#[test]
fn test_shape_errors_reported_before_any_rule() {
    assert_eq!(Board::from_rows(vec![]), Err(ShapeError::Empty));
    assert_eq!(
        Board::from_rows(vec!["**".into(), "**".into()]),
        Err(ShapeError::TooSmall { size: 2 })
    );
    assert_eq!(
        Board::from_rows(vec!["****".into(), "*12*".into(), "*21*".into()]),
        Err(ShapeError::NotSquare {
            row: 0,
            len: 4,
            expected: 3
        })
    );
}

#[test]
fn test_validate_board_reports_rules_and_indices() {
    let result = validate_board(&mutated(1, "452453*"));
    assert!(!result.is_valid());
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.rule == Rule::RowVisibility && d.index == 1));
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.rule == Rule::RowUniqueness && d.index == 1));
    // The duplicate also lands in one column.
    assert!(result
        .diagnostics
        .iter()
        .any(|d| d.rule == Rule::ColumnUniqueness && d.index == 1));
}

#[test]
fn test_validate_board_clean_on_good_fixture() {
    let result = validate_board(&board(&GOOD));
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_partial_board_is_consistent_but_incomplete() {
    let b = board(&["****", "*??*", "*12*", "****"]);
    let result = validate_board(&b);
    assert!(result.is_valid());
    assert!(result
        .diagnostics
        .iter()
        .all(|d| d.severity == Severity::Warning));
    assert!(!check_board(&b));
}

#[test]
fn test_board_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for row in GOOD {
        writeln!(file, "{row}").expect("write row");
    }

    let b = reader::load_board(file.path()).expect("load board");
    assert_eq!(b.size(), 7);
    assert!(check_board(&b));
}
