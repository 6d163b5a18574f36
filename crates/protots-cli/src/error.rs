//! Run-level error taxonomy.
//!
//! Per-file parse failures are not represented here; they are isolated,
//! logged and counted in [`crate::run::RunSummary`]. These variants are
//! the errors that abort a run (or, for watch mode, one cycle).

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for run-level operations.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that abort a generation run.
#[derive(Error, Debug)]
pub enum CliError {
    /// The pattern matched zero schema files; nothing was written.
    #[error("no schema files matched: {pattern}")]
    NoInputs { pattern: String },

    /// The supplied glob pattern is malformed.
    #[error("invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    /// An input directory could not be read.
    #[error("failed to read input directory {path}: {source}")]
    InputDir { path: PathBuf, source: io::Error },

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir { path: PathBuf, source: io::Error },

    /// A generated file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFailed { path: PathBuf, source: io::Error },

    /// Every discovered file failed to parse.
    #[error("all {failed} schema file(s) failed to parse")]
    AllFilesFailed { failed: usize },
}
