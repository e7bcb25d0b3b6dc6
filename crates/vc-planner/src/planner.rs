//! The `Planner` trait (the plug-in contract, §6.1) and its concrete
//! implementation parameterized by a [`TargetStrategy`].

use vc_core::{BatteryMeter, DirtSensor, Step, WallsSensor};

use crate::decision;
use crate::error::{PlannerError, PlannerResult};
use crate::state::PlannerState;
use crate::strategy::{Dfs, Greedy, TargetStrategy};

/// The five-operation capability set every navigation strategy implements.
///
/// Sensors are handed over as owned trait objects rather than borrowed
/// references: the Simulator wraps its `House`/`Battery` in `Rc<RefCell<_>>`
/// and gives the planner a cheap `'static` view over them (see
/// `vc-sim::sensors`), which keeps this trait free of a lifetime parameter
/// and therefore usable behind the registrar's `Box<dyn Planner>` (see
/// DESIGN.md for why the literal C++ pointer-setter shape doesn't translate
/// directly).
pub trait Planner {
    fn set_max_steps(&mut self, max_steps: usize) -> PlannerResult<()>;
    fn set_walls_sensor(&mut self, sensor: Box<dyn WallsSensor>) -> PlannerResult<()>;
    fn set_dirt_sensor(&mut self, sensor: Box<dyn DirtSensor>) -> PlannerResult<()>;
    fn set_battery_meter(&mut self, meter: Box<dyn BatteryMeter>) -> PlannerResult<()>;
    fn next_step(&mut self) -> PlannerResult<Step>;
}

/// A navigation planner generic over its rule-6 target selection strategy.
///
/// Construct via [`GreedyPlanner::new`] or [`DfsPlanner::new`]; both are
/// type aliases over this struct.
pub struct NavigationPlanner<S> {
    state: PlannerState,
    strategy: S,
    max_steps_set: bool,
    walls: Option<Box<dyn WallsSensor>>,
    dirt: Option<Box<dyn DirtSensor>>,
    battery: Option<Box<dyn BatteryMeter>>,
}

impl<S: Default> NavigationPlanner<S> {
    pub fn new() -> Self {
        Self {
            state: PlannerState::new(),
            strategy: S::default(),
            max_steps_set: false,
            walls: None,
            dirt: None,
            battery: None,
        }
    }
}

impl<S: Default> Default for NavigationPlanner<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TargetStrategy> NavigationPlanner<S> {
    fn ensure_initialized(&self) -> PlannerResult<()> {
        if self.max_steps_set && self.walls.is_some() && self.dirt.is_some() && self.battery.is_some() {
            Ok(())
        } else {
            Err(PlannerError::NotInitialized)
        }
    }
}

impl<S: TargetStrategy> Planner for NavigationPlanner<S> {
    fn set_max_steps(&mut self, max_steps: usize) -> PlannerResult<()> {
        self.state.set_max_steps(max_steps);
        self.max_steps_set = true;
        Ok(())
    }

    fn set_walls_sensor(&mut self, sensor: Box<dyn WallsSensor>) -> PlannerResult<()> {
        self.walls = Some(sensor);
        Ok(())
    }

    fn set_dirt_sensor(&mut self, sensor: Box<dyn DirtSensor>) -> PlannerResult<()> {
        self.dirt = Some(sensor);
        Ok(())
    }

    fn set_battery_meter(&mut self, meter: Box<dyn BatteryMeter>) -> PlannerResult<()> {
        self.state.set_battery_capacity(meter.battery_state());
        self.battery = Some(meter);
        Ok(())
    }

    fn next_step(&mut self) -> PlannerResult<Step> {
        self.ensure_initialized()?;

        let walls = self.walls.as_ref().expect("checked by ensure_initialized");
        let dirt = self.dirt.as_ref().expect("checked by ensure_initialized");
        let battery = self.battery.as_ref().expect("checked by ensure_initialized");

        self.state.sense_walls(|direction| walls.is_wall(direction));
        self.state.sense_dirt(dirt.dirt_level());
        self.state.sense_battery(battery.battery_state());

        let step = decision::decide(&self.state, &mut self.strategy)?;

        if step != Step::Finish {
            self.state.apply_step(step.try_into().ok());
        }

        Ok(step)
    }
}

/// "Nearest todo" strategy — §4.4's default rule 6.
pub type GreedyPlanner = NavigationPlanner<Greedy>;

/// Stack-based depth-first target selection — §4.4's alternate rule 6.
pub type DfsPlanner = NavigationPlanner<Dfs>;
