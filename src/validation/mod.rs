//! Validation Engine
//!
//! Clean separation of diagnostic reporting from the boolean rule
//! predicates.

pub mod engine;

pub use engine::{validate_board, Diagnostic, Rule, Severity};

// Re-export common types
pub use engine::ValidationResult;
