//! Command modules for the clangd-gen CLI
//!
//! Each command module implements a single top-level command:
//! - `generate` - run the full pipeline and write (or print) .clangd
//! - `databases` - list discovered databases with claim counts
//! - `conflicts` - report files claimed by more than one database
//!
//! All command handlers take their respective `Args` struct from
//! `cli.rs` and a shared `CommandContext` for output format and
//! verbosity, and return the text to print on stdout.

pub mod conflicts;
pub mod databases;
pub mod generate;

pub use conflicts::run_conflicts;
pub use databases::run_databases;
pub use generate::run_generate;

use crate::cli::OutputFormat;

/// Shared context passed to all command handlers
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
}
