//! Skyscrapers Board Validator
//!
//! Checks a completed or partial Skyscrapers puzzle board against the
//! puzzle rules: unique building heights in every row and column, and
//! edge-of-board visibility hints.
//!
//! This library provides:
//! - Board parsing with square-grid shape checking
//! - Pure rule predicates (visibility, uniqueness, completeness)
//! - Diagnostic reporting of which rule failed where
//! - File reading for the CLI front end

pub mod board;
pub mod config;
pub mod reader;
pub mod rules;
pub mod validation;

// Re-exports for clean public API
pub use board::{Board, ShapeError};
pub use rules::{
    check_board, check_columns, check_horizontal_visibility, check_not_finished_board,
    check_uniqueness_in_rows, left_to_right_check,
};
pub use validation::{validate_board, Diagnostic, ValidationResult};
