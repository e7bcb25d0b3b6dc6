//! The §4.6 scoring formula.

use vc_core::Step;

use crate::statistics::Status;

const DIRT_FACTOR: u32 = 300;
const DEAD_PENALTY: u32 = 2000;
const LYING_PENALTY: u32 = 3000;
const NOT_IN_DOCK_PENALTY: u32 = 1000;

/// Score (and status) for a run that reached a terminal condition within
/// `Simulator::run` itself — timeouts are scored separately by the
/// scheduler (`vc-scheduler::scoring::timeout_score`).
pub fn score(
    last_step: Option<Step>,
    num_steps_taken: usize,
    max_steps: usize,
    dirt_left: u32,
    is_at_docking_station: bool,
    battery_exhausted: bool,
) -> (Status, u32) {
    let s = num_steps_taken as u32;
    let d = dirt_left;
    let finished = last_step == Some(Step::Finish);

    if !finished && battery_exhausted && !is_at_docking_station {
        return (Status::Dead, max_steps as u32 + d * DIRT_FACTOR + DEAD_PENALTY);
    }

    if finished && !is_at_docking_station {
        return (Status::Dead, max_steps as u32 + d * DIRT_FACTOR + LYING_PENALTY);
    }

    if !is_at_docking_station {
        return (Status::Working, s + d * DIRT_FACTOR + NOT_IN_DOCK_PENALTY);
    }

    if finished || d == 0 {
        return (Status::Finished, s + d * DIRT_FACTOR);
    }

    (Status::Working, s + d * DIRT_FACTOR)
}
