use thiserror::Error;

use vc_sim::SimError;

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("worker thread for task {0} panicked: {1}")]
    WorkerPanicked(u64, String),

    #[error("no planner registered under {0:?}")]
    PlannerNotFound(String),

    #[error("simulation error: {0}")]
    Sim(#[from] SimError),
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
