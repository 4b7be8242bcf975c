//! Configuration management for the board checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Output format selection

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for the board checker
#[derive(Debug, Parser)]
#[command(name = "sky-check")]
#[command(about = "Validate a Skyscrapers puzzle board against its rules")]
#[command(version)]
pub struct Args {
    /// Board file, one row of the grid per line
    pub board: PathBuf,

    /// Output format for the verdict and diagnostics
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// How the verdict and diagnostics are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per diagnostic plus the verdict
    Text,
    /// A single JSON report
    Json,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the board file to check
    pub board: PathBuf,
    /// Output format
    pub format: OutputFormat,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Self {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Self {
        Config {
            board: args.board,
            format: args.format,
            log_level: args.log_level,
        }
    }
}
