use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use vc_battery::Battery;
use vc_core::{BatteryMeter, DirtSensor, Step, WallsSensor};
use vc_house::{Grid, House};
use vc_planner::{Planner, PlannerResult};

use crate::{Scheduler, TaskSpec};

fn open_house(side: usize) -> House {
    let grid = Grid::new(side, side, vec![false; side * side], vec![0; side * side]);
    House::new(grid, vc_core::Position::ORIGIN).unwrap()
}

#[test]
fn scheduler_reports_one_outcome_per_task_in_order() {
    let specs = vec![
        TaskSpec { planner_name: "Greedy".into(), house_name: "a".into(), house: open_house(3), battery: Battery::new(20), max_steps: 50 },
        TaskSpec { planner_name: "Dfs".into(), house_name: "b".into(), house: open_house(3), battery: Battery::new(20), max_steps: 50 },
    ];
    let outcomes = Scheduler::with_registry(specs, 2).run();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].house_name, "a");
    assert_eq!(outcomes[1].house_name, "b");
    assert!(outcomes.iter().all(|o| !o.timed_out && o.error.is_none()));
}

#[test]
fn scheduler_with_more_tasks_than_workers_completes_all_of_them() {
    let specs: Vec<TaskSpec> = (0..6)
        .map(|i| TaskSpec {
            planner_name: "Greedy".into(),
            house_name: format!("house-{i}"),
            house: open_house(2),
            battery: Battery::new(10),
            max_steps: 20,
        })
        .collect();
    let outcomes = Scheduler::with_registry(specs, 2).run();

    assert_eq!(outcomes.len(), 6);
    assert!(outcomes.iter().all(|o| o.error.is_none()));
}

#[test]
fn unknown_planner_name_is_reported_as_an_error_outcome() {
    let specs = vec![TaskSpec {
        planner_name: "NoSuchPlanner".into(),
        house_name: "a".into(),
        house: open_house(2),
        battery: Battery::new(10),
        max_steps: 10,
    }];
    let outcomes = Scheduler::with_registry(specs, 1).run();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].error.is_some());
    assert!(!outcomes[0].timed_out);
}

/// A mock planner that never returns from `next_step()`, to exercise the
/// scheduler's timeout path (§8 scenario 6) without waiting on a real
/// infinite loop — it blocks on a condvar-free busy sleep respecting
/// cooperative cancellation only via the test's own timeout budget, never
/// checking the stop flag itself (that's the point: the mock does not
/// cooperate, it just never returns).
struct NeverReturns {
    initialized: AtomicBool,
}

impl NeverReturns {
    fn new() -> Self {
        Self { initialized: AtomicBool::new(false) }
    }
}

impl Planner for NeverReturns {
    fn set_max_steps(&mut self, _max_steps: usize) -> PlannerResult<()> {
        Ok(())
    }
    fn set_walls_sensor(&mut self, _sensor: Box<dyn WallsSensor>) -> PlannerResult<()> {
        Ok(())
    }
    fn set_dirt_sensor(&mut self, _sensor: Box<dyn DirtSensor>) -> PlannerResult<()> {
        Ok(())
    }
    fn set_battery_meter(&mut self, _meter: Box<dyn BatteryMeter>) -> PlannerResult<()> {
        self.initialized.store(true, Ordering::Relaxed);
        Ok(())
    }
    fn next_step(&mut self) -> PlannerResult<Step> {
        // Simulate a planner stuck on unbounded work; sleeping well past
        // any test deadline stands in for "never returns". The scheduler
        // never joins worker threads (see `Scheduler::run`), so this sleep
        // outliving the test itself leaks a thread rather than hanging it.
        std::thread::sleep(Duration::from_secs(5));
        Ok(Step::Finish)
    }
}

#[test]
fn a_planner_that_never_returns_is_scored_via_timeout() {
    vc_planner::registry::register("NeverReturns", || Box::new(NeverReturns::new()));

    let specs = vec![TaskSpec {
        planner_name: "NeverReturns".into(),
        house_name: "stuck".into(),
        house: open_house(2),
        battery: Battery::new(20),
        max_steps: 20,
    }];
    let outcomes = Scheduler::with_registry(specs, 1).run();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].timed_out);
    assert_eq!(outcomes[0].score, crate::scoring::timeout_score(20, 0));
}

#[test]
fn multiple_stuck_tasks_do_not_deadlock_with_fewer_workers_than_tasks() {
    vc_planner::registry::register("NeverReturns2", || Box::new(NeverReturns::new()));

    let specs: Vec<TaskSpec> = (0..4)
        .map(|i| TaskSpec {
            planner_name: "NeverReturns2".into(),
            house_name: format!("stuck-{i}"),
            house: open_house(2),
            battery: Battery::new(10),
            max_steps: 10,
        })
        .collect();
    let outcomes = Scheduler::with_registry(specs, 2).run();

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.timed_out));
}
