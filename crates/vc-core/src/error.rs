//! Shared error type for primitives owned directly by `vc-core`.
//!
//! Most domain errors (parse failures, planner contract violations, runtime
//! planner faults) belong to the crate that owns that seam — see
//! `vc-env::EnvError`, `vc-planner::PlannerError`, `vc-sim::SimError`. This
//! type exists for the rare error that belongs to a `vc-core` primitive
//! itself.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum VcError {
    #[error("invalid conversion: {0}")]
    InvalidConversion(&'static str),
}

pub type VcResult<T> = Result<T, VcError>;
