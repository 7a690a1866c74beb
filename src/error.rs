//! Error types and exit codes for clangd-gen

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for clangd-gen operations.
///
/// Only run-level failures live here. Malformed database records and
/// documents are absorbed where they are read and never propagate.
#[derive(Error, Debug)]
pub enum ClangdGenError {
    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("No compile_commands.json found under {}", root.display())]
    NoDatabases { root: PathBuf },

    #[error("Failed to write {}: {message}", path.display())]
    WriteFailure { path: PathBuf, message: String },

    #[error("Failed to encode report: {message}")]
    ReportFailure { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClangdGenError {
    /// Convert error to appropriate exit code:
    /// - 0: Success
    /// - 1: Directory not found / IO error
    /// - 2: No compilation database found
    /// - 3: Output write failure
    /// - 4: Report encoding failure
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::DirectoryNotFound { .. } => ExitCode::from(1),
            Self::NoDatabases { .. } => ExitCode::from(2),
            Self::WriteFailure { .. } => ExitCode::from(3),
            Self::ReportFailure { .. } => ExitCode::from(4),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for clangd-gen operations
pub type Result<T> = std::result::Result<T, ClangdGenError>;
