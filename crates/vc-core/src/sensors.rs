//! Sensor contracts the planner reads through.
//!
//! Implementations live in `vc-house` (walls/dirt, backed by the authoritative
//! grid) and `vc-battery` (the battery meter). The planner never sees the
//! concrete types — only these traits — so a test can substitute a mock
//! sensor without depending on `vc-house`/`vc-battery` at all.

use crate::Direction;

/// Read-only view of the four neighbor cells around the agent's current
/// position. Safe to call any number of times per tick.
pub trait WallsSensor {
    /// `true` if the neighbor in `direction` is a wall or off-grid.
    fn is_wall(&self, direction: Direction) -> bool;
}

/// Read-only view of the dirt level under the agent.
pub trait DirtSensor {
    /// Dirt level at the agent's current position, `0..=9`.
    fn dirt_level(&self) -> u32;
}

/// Read-only view of the remaining battery.
pub trait BatteryMeter {
    /// Remaining battery, expressed in whole steps (`⌊level⌋`).
    fn battery_state(&self) -> usize;
}
