//! Convenience wrappers around [`vc_pathtree::bfs`] for the three searches
//! the decision state machine needs: nearest todo, back to station, and a
//! specific target position.

use vc_core::{Direction, Position};
use vc_pathtree::{bfs, reconstruct_path, PathTree};

use crate::state::{PlannerState, DOCKING_STATION};

/// Run a bounded BFS from `start` for `found`, returning the reconstructed
/// path of directions if one exists.
fn search(
    state: &PlannerState,
    start: Position,
    max_depth: usize,
    found: impl Fn(Position) -> bool,
) -> Option<Vec<Direction>> {
    let mut tree = PathTree::new();
    let root = tree.insert_root(start);
    let walls = state.wall_knowledge();
    let end = bfs(&mut tree, root, &walls, max_depth, |p| state.is_todo(p), found)?;
    Some(reconstruct_path(&tree, end))
}

/// BFS from `start` to the nearest todo position, bounded by `max_depth`.
pub fn path_to_nearest_todo(
    state: &PlannerState,
    start: Position,
    max_depth: usize,
) -> Option<Vec<Direction>> {
    search(state, start, max_depth, |p| state.is_todo(p))
}

/// BFS from the planner's current position back to the docking station.
/// Unbounded: the search space is the discovered wall map, which is always
/// finite, and the dock must always be reachable (§4.4 rule raises
/// `UnreachableDock` otherwise).
pub fn path_to_station(state: &PlannerState) -> Option<Vec<Direction>> {
    search(state, state.current_position(), usize::MAX, |p| p == DOCKING_STATION)
}

/// BFS from `start` to a specific `target`, bounded by `max_depth`.
pub fn path_to_position(
    state: &PlannerState,
    start: Position,
    target: Position,
    max_depth: usize,
) -> Option<Vec<Direction>> {
    search(state, start, max_depth, |p| p == target)
}

/// The furthest a fully charged agent could travel to dirt and still return,
/// grounded in `original_source`'s `getMaxReachableDistance`:
/// `(min(battery_capacity, max_steps) - 1) / 2`, floored at zero.
pub fn max_reachable_distance(battery_capacity: usize, max_steps: usize) -> usize {
    let max_possible_steps = battery_capacity.min(max_steps);
    if max_possible_steps == 0 {
        return 0;
    }
    (max_possible_steps - 1) / 2
}
