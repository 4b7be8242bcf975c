//! Board file reading
//!
//! The only I/O in the crate: load a text file into trimmed row strings and,
//! as a convenience, straight into a shape-checked [`Board`]. The rule
//! predicates never touch the file system; they consume the parsed rows.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::board::Board;

/// Read a board file into one string per row, trailing whitespace stripped.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect();
    debug!("read {} rows from {}", lines.len(), path.display());
    Ok(lines)
}

/// Read a board file and build a shape-checked board from it.
pub fn load_board(path: &Path) -> anyhow::Result<Board> {
    let lines =
        read_lines(path).with_context(|| format!("reading board file {}", path.display()))?;
    let board = Board::from_rows(lines)
        .with_context(|| format!("malformed board in {}", path.display()))?;
    Ok(board)
}
