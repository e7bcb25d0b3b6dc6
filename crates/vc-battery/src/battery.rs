//! Continuous-charge battery.
//!
//! `level` is tracked as `f32` rather than an integer so that a partial
//! recharge (`capacity / 20` per `Stay`-at-dock tick) accumulates correctly
//! across many ticks instead of rounding away. Only `battery_state()`
//! truncates to a whole number of steps.

use vc_core::BatteryMeter;

use crate::error::{BatteryError, BatteryResult};

const STEPS_TO_FULL_CHARGE: f32 = 20.0;
const DISCHARGE_UNIT: f32 = 1.0;

/// A battery with a fixed integer capacity and a continuous charge level.
#[derive(Clone, Debug)]
pub struct Battery {
    capacity: u32,
    level: f32,
}

impl Battery {
    /// A fresh, fully charged battery of `capacity` steps.
    pub fn new(capacity: u32) -> Self {
        Self { capacity, level: capacity as f32 }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Subtract one discharge unit.
    ///
    /// # Errors
    /// [`BatteryError::Empty`] if the result would go negative. Per §7, this
    /// should be unreachable given the decision rules; if it fires, the
    /// caller treats it as a planner fault.
    pub fn discharge(&mut self) -> BatteryResult<()> {
        let updated = self.level - DISCHARGE_UNIT;
        if updated < 0.0 {
            return Err(BatteryError::Empty);
        }
        self.level = updated;
        Ok(())
    }

    /// Add `capacity / 20` steps, clamped to `capacity`.
    pub fn charge(&mut self) {
        let updated = self.level + self.capacity as f32 / STEPS_TO_FULL_CHARGE;
        self.level = updated.min(self.capacity as f32);
    }

    /// `true` iff the whole-step level has reached zero.
    pub fn is_exhausted(&self) -> bool {
        self.battery_state() == 0
    }

    /// `true` iff the battery is at its full capacity (no charging needed).
    pub fn is_full(&self) -> bool {
        self.battery_state() as u32 >= self.capacity
    }
}

impl BatteryMeter for Battery {
    fn battery_state(&self) -> usize {
        self.level.floor() as usize
    }
}
