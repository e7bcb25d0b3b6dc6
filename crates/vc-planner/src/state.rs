//! Planner state: the incrementally discovered map plus the current tick's
//! budget figures, all relative to the docking station at planner-relative
//! `(0, 0)`.

use std::collections::{HashMap, HashSet};

use vc_core::{Direction, Position};
use vc_pathtree::search::WallKnowledge;

/// Everything the planner has learned about the house, plus its current
/// budget, carried across ticks for exactly one simulation.
///
/// Invariants (see `SPEC_FULL.md` §3):
/// - `current_position` is always marked open in `wall_map`.
/// - Every position in `todo_positions` is also in `wall_map`, marked open.
/// - `wall_map`/`todo_positions` only grow; a recorded wall/open value never
///   changes once set.
pub struct PlannerState {
    wall_map: HashMap<Position, bool>,
    todo_positions: HashSet<Position>,
    current_position: Position,
    current_dirt_level: u32,
    battery_remaining: usize,
    battery_capacity: usize,
    steps_remaining: usize,
    max_steps: usize,
}

/// The docking station is always planner-relative `(0, 0)`, by convention.
pub const DOCKING_STATION: Position = Position::ORIGIN;

impl PlannerState {
    pub fn new() -> Self {
        let mut wall_map = HashMap::new();
        wall_map.insert(DOCKING_STATION, false);
        Self {
            wall_map,
            todo_positions: HashSet::new(),
            current_position: DOCKING_STATION,
            current_dirt_level: 0,
            battery_remaining: 0,
            battery_capacity: 0,
            steps_remaining: 0,
            max_steps: 0,
        }
    }

    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps;
        self.steps_remaining = max_steps;
    }

    pub fn set_battery_capacity(&mut self, capacity: usize) {
        self.battery_capacity = capacity;
    }

    pub fn current_position(&self) -> Position {
        self.current_position
    }

    pub fn current_dirt_level(&self) -> u32 {
        self.current_dirt_level
    }

    pub fn battery_remaining(&self) -> usize {
        self.battery_remaining
    }

    pub fn battery_capacity(&self) -> usize {
        self.battery_capacity
    }

    pub fn steps_remaining(&self) -> usize {
        self.steps_remaining
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// `min(battery_remaining, steps_remaining)` — the joint budget a
    /// decision must respect.
    pub fn budget(&self) -> usize {
        self.battery_remaining.min(self.steps_remaining)
    }

    pub fn is_at_docking_station(&self) -> bool {
        self.current_position == DOCKING_STATION
    }

    pub fn battery_is_full(&self) -> bool {
        self.battery_remaining >= self.battery_capacity
    }

    pub fn is_todo(&self, position: Position) -> bool {
        self.todo_positions.contains(&position)
    }

    pub fn todo_positions(&self) -> &HashSet<Position> {
        &self.todo_positions
    }

    /// Record a sensed wall reading for `position` if not already known.
    /// Open positions are added to `todo_positions` (pending the dirt
    /// sensor's own verdict on whether they stay there).
    fn record_wall(&mut self, position: Position, is_wall: bool) {
        if self.wall_map.contains_key(&position) {
            return;
        }
        self.wall_map.insert(position, is_wall);
        if !is_wall {
            self.todo_positions.insert(position);
        }
    }

    /// §4.3 step 1: sense walls in all four directions around the current
    /// position, recording any not already known, then mark the current
    /// position itself as open.
    pub fn sense_walls(&mut self, is_wall: impl Fn(Direction) -> bool) {
        for direction in Direction::ALL {
            let neighbor = self.current_position.moved(direction);
            if self.wall_map.contains_key(&neighbor) {
                continue;
            }
            self.record_wall(neighbor, is_wall(direction));
        }
        self.wall_map.insert(self.current_position, false);
    }

    /// §4.3 step 2: sense dirt under the current position, adding/removing
    /// it from `todo_positions` accordingly.
    pub fn sense_dirt(&mut self, dirt_level: u32) {
        self.current_dirt_level = dirt_level;
        if dirt_level > 0 {
            self.todo_positions.insert(self.current_position);
        } else {
            self.todo_positions.remove(&self.current_position);
        }
    }

    /// §4.3 step 3: refresh the remaining-battery reading.
    pub fn sense_battery(&mut self, battery_state: usize) {
        self.battery_remaining = battery_state;
    }

    /// Apply a non-`Finish` step: consumes one step, and for a directional
    /// step, moves the current position. Mirrors the original's `move()`.
    pub fn apply_step(&mut self, direction: Option<Direction>) {
        self.steps_remaining = self.steps_remaining.saturating_sub(1);
        if let Some(direction) = direction {
            self.current_position = self.current_position.moved(direction);
        }
    }

    /// A read-only view over `wall_map` suitable for [`vc_pathtree::bfs`].
    pub fn wall_knowledge(&self) -> WallMapView<'_> {
        WallMapView(&self.wall_map)
    }
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapts `PlannerState`'s `wall_map` to [`WallKnowledge`] without exposing
/// the map itself.
pub struct WallMapView<'a>(&'a HashMap<Position, bool>);

impl WallKnowledge for WallMapView<'_> {
    fn wall_state(&self, position: Position) -> Option<bool> {
        self.0.get(&position).copied()
    }
}
