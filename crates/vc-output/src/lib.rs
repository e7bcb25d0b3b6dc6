//! `vc-output` — the output artifacts a completed run produces (§6.3):
//! per-simulation text files, the aggregate `summary.csv`, and `<module>.error`
//! error artifacts.
//!
//! There is exactly one on-disk format here, specified directly by
//! `original_source/src/output_handler.h`, so no pluggable-backend trait
//! indirection is needed — just plain filesystem text and CSV writers.
//!
//! | Module       | Contents                                            |
//! |--------------|------------------------------------------------------|
//! | [`artifact`] | per-simulation `<house>-<algorithm>.txt` writer       |
//! | [`summary`]  | [`summary::RunSummary`] and its pivoted CSV writer    |
//! | [`error_log`]| `<module>.error` append-mode writer                   |
//! | [`error`]    | [`error::OutputError`]                                |

pub mod artifact;
pub mod error;
pub mod error_log;
pub mod summary;

#[cfg(test)]
mod tests;

pub use artifact::write_simulation_artifact;
pub use error::{OutputError, OutputResult};
pub use error_log::write_error_artifact;
pub use summary::RunSummary;
