//! Target selection strategies — the single extension point rule 6 of the
//! decision state machine defers to (§4.4). Everything else (sensing,
//! rules 1-5 and 7) is shared by every strategy.

use std::collections::HashSet;

use vc_core::{Direction, Position};

use crate::search;
use crate::state::PlannerState;

/// Picks the next todo position to head toward when no higher-priority rule
/// fired. Only rule 6 of the decision table consults this.
pub trait TargetStrategy {
    /// A path from the current position toward the strategy's chosen
    /// target, bounded by `max_depth`, or `None` if no candidate is
    /// reachable within it.
    fn get_path_to_next_target(&mut self, state: &PlannerState, max_depth: usize) -> Option<Vec<Direction>>;
}

/// "Nearest todo" — the default rule 6 behavior, a plain BFS from the
/// current position.
#[derive(Default)]
pub struct Greedy;

impl TargetStrategy for Greedy {
    fn get_path_to_next_target(&mut self, state: &PlannerState, max_depth: usize) -> Option<Vec<Direction>> {
        search::path_to_nearest_todo(state, state.current_position(), max_depth)
    }
}

/// Maintains a stack of todo candidates discovered while exploring,
/// preferring depth-first descent over always retargeting the globally
/// nearest todo. Grounded in `original_source/src/algorithm/b/dfs_algorithm.cc`.
#[derive(Default)]
pub struct Dfs {
    /// Positions already pushed, so the same todo is never queued twice.
    registered: HashSet<Position>,
    position_stack: Vec<Position>,
    /// The target the strategy committed to on a previous tick, persisted
    /// until reached or abandoned.
    current_target: Option<Position>,
}

impl Dfs {
    fn register_positions(&mut self, state: &PlannerState, current: Position) {
        self.registered.insert(current);
        for direction in Direction::ALL {
            let next = current.moved(direction);
            if state.is_todo(next) && !self.registered.contains(&next) {
                self.position_stack.push(next);
                self.registered.insert(next);
            }
        }
    }
}

impl TargetStrategy for Dfs {
    fn get_path_to_next_target(&mut self, state: &PlannerState, max_depth: usize) -> Option<Vec<Direction>> {
        let start = state.current_position();

        // A higher-priority rule took over and moved us somewhere other
        // than our committed target; head back toward it.
        if let Some(target) = self.current_target {
            if start != target {
                return search::path_to_position(state, start, target, max_depth);
            }
        }

        self.register_positions(state, start);

        if state.is_todo(start) {
            self.current_target = Some(start);
            return search::path_to_position(state, start, start, max_depth);
        }

        // Pop until we find a target that's still reachable; per §9, a
        // stack-top that's since been walled off or already cleaned is
        // simply discarded rather than failing the tick.
        while let Some(candidate) = self.position_stack.pop() {
            if let Some(path) = search::path_to_position(state, start, candidate, max_depth) {
                self.current_target = Some(candidate);
                return Some(path);
            }
        }

        self.current_target = None;
        None
    }
}
