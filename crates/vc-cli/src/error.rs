//! `CliError` — argument-parsing and directory-scanning failures (§6.4).
//!
//! Everything past argument parsing (environment parse failures, planner
//! faults, scheduler faults) is per-simulation and handled as an output
//! artifact rather than a process-level error (§7) — only the failures
//! listed here abort the whole run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("argument {0} is missing its `=value`")]
    MissingValue(&'static str),

    #[error("argument {name} has a non-integer value {value:?}")]
    NotAnInteger { name: &'static str, value: String },

    #[error("failed to open directory: {0}")]
    DirectoryOpen(std::path::PathBuf),
}

pub type CliResult<T> = Result<T, CliError>;
