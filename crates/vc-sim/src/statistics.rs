//! `SimulationStatistics` — everything recorded about one (planner, house)
//! run, plus the `Status` it ended in (§3.1, §4.5).

use std::fmt;

use vc_core::Step;

/// The outcome a run settles into once `Simulator::run` returns.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    /// `max_steps` was reached without the mission completing: either the
    /// agent is away from the dock and still has battery, or it is at the
    /// dock with dirt left and the planner never emitted `Finish`.
    Working,
    /// Ended via `Step::Finish` while at the dock, or ran out of steps at
    /// the dock with nothing left to clean.
    Finished,
    /// Battery exhausted away from the dock, or `Step::Finish` reported
    /// away from the dock (lying).
    Dead,
}

impl fmt::Display for Status {
    /// The `Status = FINISHED|WORKING|DEAD` text used in the per-simulation
    /// output artifact (§6.3).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Working => "WORKING",
            Status::Finished => "FINISHED",
            Status::Dead => "DEAD",
        };
        f.write_str(s)
    }
}

/// Everything recorded about one run of `Simulator::run`.
#[derive(Clone, Debug)]
pub struct SimulationStatistics {
    pub num_steps_taken: usize,
    pub step_history: Vec<Step>,
    pub dirt_left: u32,
    pub is_at_docking_station: bool,
    pub status: Status,
    pub score: u32,
}
