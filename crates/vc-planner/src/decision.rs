//! The per-turn decision state machine (§4.4): an ordered table of rules,
//! evaluated top-to-bottom, first match wins. Shared by every
//! [`TargetStrategy`][crate::strategy::TargetStrategy] — only rule 6 varies
//! per strategy.

use vc_core::Step;

use crate::error::{PlannerError, PlannerResult};
use crate::search;
use crate::state::{PlannerState, DOCKING_STATION};
use crate::strategy::TargetStrategy;

/// Decide the next [`Step`] given the current tick's sensed state.
///
/// # Errors
/// [`PlannerError::UnreachableDock`] if no path back to the dock exists in
/// the discovered map — an impossible state the agent must never reach
/// given a correctly modeled environment.
pub fn decide(state: &PlannerState, strategy: &mut dyn TargetStrategy) -> PlannerResult<Step> {
    let path_to_dock = search::path_to_station(state).ok_or(PlannerError::UnreachableDock)?;
    let station_distance = path_to_dock.len();
    let budget = state.budget();
    let at_dock = state.is_at_docking_station();
    let all_reachable_cleaned = is_all_reachable_cleaned(state);

    // Rule 1: out of steps, or nothing left worth doing and we're home.
    if state.steps_remaining() == 0 || (at_dock && all_reachable_cleaned) {
        return Ok(Step::Finish);
    }

    // Rule 2: top off the battery while there's still something reachable
    // to do once charged.
    if at_dock && !state.battery_is_full() && can_clean_within_budget(state) {
        return Ok(Step::Stay);
    }

    // Rule 3: cannot safely linger — head home now.
    if budget < 1 + station_distance || all_reachable_cleaned {
        return Ok(first_step(&path_to_dock));
    }

    // Rule 4: dirt under us, and we can safely stay another turn (rule 3
    // already ruled out the unsafe case).
    if state.current_dirt_level() > 0 {
        return Ok(Step::Stay);
    }

    // Rule 5: cannot safely move one more step away from home.
    if budget < 2 + station_distance {
        return Ok(first_step(&path_to_dock));
    }

    // Rule 6: head toward the strategy's chosen target, if it survives
    // validation against the joint budget.
    if let Some(path) = strategy.get_path_to_next_target(state, budget) {
        if !path.is_empty() && is_valid_target_path(state, &path, budget) {
            return Ok(first_step(&path));
        }
    }

    // Rule 7: nothing valid to do — go home, or declare victory if we
    // already are.
    if at_dock {
        Ok(Step::Finish)
    } else {
        Ok(first_step(&path_to_dock))
    }
}

fn first_step(path: &[vc_core::Direction]) -> Step {
    path[0].into()
}

/// "Could clean within budget" (used by rule 2): BFS from current for the
/// nearest todo; if found, `2 * distance + 1 < steps_remaining`.
fn can_clean_within_budget(state: &PlannerState) -> bool {
    let Some(path) = search::path_to_nearest_todo(state, state.current_position(), state.steps_remaining())
    else {
        return false;
    };
    2 * path.len() + 1 < state.steps_remaining()
}

/// `all_reachable_cleaned`: no todo is reachable from the dock, or the
/// nearest one's distance exceeds `max_reachable_distance`.
fn is_all_reachable_cleaned(state: &PlannerState) -> bool {
    let max_distance = search::max_reachable_distance(state.battery_capacity(), state.max_steps());
    match search::path_to_nearest_todo(state, DOCKING_STATION, state.steps_remaining()) {
        None => true,
        Some(path) => path.len() > max_distance,
    }
}

/// Target validation for rule 6: walk `path` from the current position,
/// and accept it if some prefix reaches a todo `t'` such that
/// `steps_to_t' + 1 + dist(t', dock) <= budget`.
fn is_valid_target_path(state: &PlannerState, path: &[vc_core::Direction], budget: usize) -> bool {
    let mut position = state.current_position();
    for (steps_to_position, &direction) in path.iter().enumerate().map(|(i, d)| (i + 1, d)) {
        position = position.moved(direction);
        if !state.is_todo(position) {
            continue;
        }
        let Some(path_home) = search::path_to_position(state, position, DOCKING_STATION, budget) else {
            continue;
        };
        let total_required = steps_to_position + 1 + path_home.len();
        if total_required <= budget {
            return true;
        }
    }
    false
}
