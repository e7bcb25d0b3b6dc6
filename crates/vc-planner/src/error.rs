use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("next_step() called before all four setters")]
    NotInitialized,

    #[error("no path from the current position back to the docking station")]
    UnreachableDock,
}

pub type PlannerResult<T> = Result<T, PlannerError>;
