//! `OutputError` — everything that can go wrong writing an artifact.

use thiserror::Error;

/// A thin wrapper over the one or two failure sources writing an artifact
/// actually has.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("output I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("summary CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
