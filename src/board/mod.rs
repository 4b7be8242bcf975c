//! Board Grid
//!
//! Grid representation and the shape-level transformations the rules build
//! on: square-grid construction, 90-degree rotation, line reversal.

pub mod grid;

pub use grid::{reverse_line, Board, ShapeError, NO_HINT, UNKNOWN};
