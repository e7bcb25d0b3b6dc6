//! The `Simulator` — ties a planner to a house/battery pair and drives the
//! tick loop (§4.5).

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use vc_battery::Battery;
use vc_core::{Direction, Step};
use vc_house::House;
use vc_planner::Planner;

use crate::error::SimResult;
use crate::scoring;
use crate::sensors::{BatteryLevelMeter, HouseDirtSensor, HouseWallsSensor};
use crate::statistics::{SimulationStatistics, Status};

/// Drives one (planner, house) pairing to completion.
///
/// Owns the `House` and `Battery`; the planner only ever sees them through
/// the `Rc<RefCell<_>>`-backed sensor adapters in [`crate::sensors`].
pub struct Simulator {
    house: Rc<RefCell<House>>,
    battery: Rc<RefCell<Battery>>,
    max_steps: usize,
    planner: Box<dyn Planner>,
    stop_requested: Arc<AtomicBool>,
}

impl Simulator {
    /// Construct a simulator wiring `planner` up to `house`/`battery` via
    /// `set_max_steps`/`set_walls_sensor`/`set_dirt_sensor`/`set_battery_meter`.
    pub fn new(
        mut planner: Box<dyn Planner>,
        house: House,
        battery: Battery,
        max_steps: usize,
    ) -> SimResult<Self> {
        let house = Rc::new(RefCell::new(house));
        let battery = Rc::new(RefCell::new(battery));

        planner.set_max_steps(max_steps)?;
        planner.set_walls_sensor(Box::new(HouseWallsSensor(house.clone())))?;
        planner.set_dirt_sensor(Box::new(HouseDirtSensor(house.clone())))?;
        planner.set_battery_meter(Box::new(BatteryLevelMeter(battery.clone())))?;

        Ok(Self {
            house,
            battery,
            max_steps,
            planner,
            stop_requested: Arc::new(AtomicBool::new(false)),
        })
    }

    /// A handle the scheduler's timer thread can use to request cooperative
    /// cancellation (§4.7, §5). Checked once per tick, at the `next_step()`
    /// boundary.
    pub fn cancellation_handle(&self) -> Arc<AtomicBool> {
        self.stop_requested.clone()
    }

    /// Run to completion: `Finish`, battery exhaustion away from the dock,
    /// `max_steps` reached, or cooperative cancellation.
    ///
    /// # Errors
    /// Propagates a planner contract violation (`SimError::Planner`) or a
    /// simulator-level fault applying a step the planner emitted
    /// (`SimError::House`/`SimError::Battery`) — both considered fatal
    /// programming errors per §4.7's failure modes, surfaced as an error
    /// artifact rather than a score.
    pub fn run(&mut self) -> SimResult<SimulationStatistics> {
        log::info!("simulation starting (max_steps={})", self.max_steps);

        let mut step_history = Vec::new();
        let mut num_steps_taken = 0usize;
        let mut last_step = None;

        while num_steps_taken < self.max_steps {
            if self.stop_requested.load(Ordering::Relaxed) {
                log::info!("simulation cancelled after {num_steps_taken} steps");
                break;
            }

            let step = self.planner.next_step()?;

            if step == Step::Finish {
                step_history.push(step);
                last_step = Some(step);
                break;
            }

            self.apply_step(step)?;
            step_history.push(step);
            last_step = Some(step);
            num_steps_taken += 1;

            if !self.house.borrow().is_at_docking_station() && self.battery.borrow().is_exhausted() {
                break;
            }
        }

        let dirt_left = self.house.borrow().total_dirt_left();
        let is_at_docking_station = self.house.borrow().is_at_docking_station();
        let battery_exhausted = self.battery.borrow().is_exhausted();

        let (status, score) = scoring::score(
            last_step,
            num_steps_taken,
            self.max_steps,
            dirt_left,
            is_at_docking_station,
            battery_exhausted,
        );

        log::info!(
            "simulation finished: status={status:?} steps={num_steps_taken} dirt_left={dirt_left} score={score}"
        );

        Ok(SimulationStatistics {
            num_steps_taken,
            step_history,
            dirt_left,
            is_at_docking_station,
            status,
            score,
        })
    }

    fn apply_step(&mut self, step: Step) -> SimResult<()> {
        match step {
            Step::Finish => unreachable!("Finish is handled by the caller before reaching apply_step"),
            Step::Stay => {
                if self.house.borrow().is_at_docking_station() {
                    self.battery.borrow_mut().charge();
                } else {
                    self.battery.borrow_mut().discharge()?;
                    self.house.borrow_mut().clean_current_position();
                }
            }
            direction_step => {
                let direction = Direction::try_from(direction_step)
                    .expect("non-Stay, non-Finish Step is always a Direction");
                self.battery.borrow_mut().discharge()?;
                self.house.borrow_mut().move_agent(direction)?;
            }
        }
        Ok(())
    }
}
