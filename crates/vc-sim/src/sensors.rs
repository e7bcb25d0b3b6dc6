//! Adapters that give a [`Planner`][vc_planner::Planner] a `'static`, cheaply
//! cloned view over the Simulator's owned `House`/`Battery`, via `Rc<RefCell<_>>`.
//!
//! The planner trait takes owned `Box<dyn Sensor>` parameters (see
//! `vc_planner::planner`'s doc comment for why), and single-ownership doesn't
//! work when the Simulator itself needs to keep mutating the same `House`
//! and `Battery` after handing sensors to the planner — hence the shared,
//! interior-mutable handles instead of plain references.

use std::cell::RefCell;
use std::rc::Rc;

use vc_battery::Battery;
use vc_core::{BatteryMeter, Direction, DirtSensor, WallsSensor};
use vc_house::House;

pub struct HouseWallsSensor(pub Rc<RefCell<House>>);

impl WallsSensor for HouseWallsSensor {
    fn is_wall(&self, direction: Direction) -> bool {
        self.0.borrow().is_wall(direction)
    }
}

pub struct HouseDirtSensor(pub Rc<RefCell<House>>);

impl DirtSensor for HouseDirtSensor {
    fn dirt_level(&self) -> u32 {
        self.0.borrow().dirt_level()
    }
}

pub struct BatteryLevelMeter(pub Rc<RefCell<Battery>>);

impl BatteryMeter for BatteryLevelMeter {
    fn battery_state(&self) -> usize {
        self.0.borrow().battery_state()
    }
}
