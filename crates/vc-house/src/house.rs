//! The `House` — the Simulator's authoritative environment, and the planner's
//! `WallsSensor`/`DirtSensor` backing store.

use vc_core::{Direction, DirtSensor, Position, WallsSensor};

use crate::error::{HouseError, HouseResult};
use crate::grid::Grid;

/// Owns the grid, the dock position, and the agent's current position.
///
/// Immutable after construction except for the grid's dirt levels
/// (monotonically non-increasing) and `agent_position`. `initial_dirt` is
/// captured at construction time for scoring (§4.6 uses the *current* dirt
/// left, but error/lying scoring paths reference the original total).
pub struct House {
    grid: Grid,
    agent_position: Position,
    dock_position: Position,
    initial_dirt: u32,
}

impl House {
    /// `dock_position` must be in-bounds and non-wall; violating this is a
    /// malformed environment, not a runtime fault, so it is asserted rather
    /// than returned as an error — the parser (`vc-env`) is responsible for
    /// rejecting such files before a `House` is ever built.
    pub fn new(grid: Grid, dock_position: Position) -> HouseResult<Self> {
        if grid.is_wall(dock_position) {
            return Err(HouseError::DockOutOfBounds(dock_position));
        }
        let initial_dirt = grid.total_dirt();
        Ok(Self {
            grid,
            agent_position: dock_position,
            dock_position,
            initial_dirt,
        })
    }

    pub fn agent_position(&self) -> Position {
        self.agent_position
    }

    pub fn dock_position(&self) -> Position {
        self.dock_position
    }

    pub fn is_at_docking_station(&self) -> bool {
        self.agent_position == self.dock_position
    }

    pub fn initial_dirt(&self) -> u32 {
        self.initial_dirt
    }

    pub fn total_dirt_left(&self) -> u32 {
        self.grid.total_dirt()
    }

    /// Subtract one unit of dirt at the agent's current position.
    pub fn clean_current_position(&mut self) {
        self.grid.clean(self.agent_position);
    }

    /// Move the agent one cell in `direction`.
    ///
    /// # Errors
    /// [`HouseError::InvalidMove`] if the destination is a wall — the
    /// planner is contractually forbidden from requesting this (§4.5); the
    /// Simulator treats it as a fatal *Invalid-Move* fault.
    pub fn move_agent(&mut self, direction: Direction) -> HouseResult<()> {
        let next = self.agent_position.moved(direction);
        if self.grid.is_wall(next) {
            return Err(HouseError::InvalidMove(next));
        }
        self.agent_position = next;
        Ok(())
    }
}

impl WallsSensor for House {
    fn is_wall(&self, direction: Direction) -> bool {
        self.grid.is_wall(self.agent_position.moved(direction))
    }
}

impl DirtSensor for House {
    fn dirt_level(&self) -> u32 {
        self.grid.dirt_level(self.agent_position)
    }
}
