//! One `(planner, house)` pairing: the inputs needed to build a
//! [`vc_sim::Simulator`], and the shared state a worker thread and the timer
//! thread use to race the §4.7 completion-vs-timeout CAS.

use std::sync::atomic::AtomicBool;
use std::sync::Mutex;

use vc_battery::Battery;
use vc_house::House;
use vc_sim::Status;

/// The pieces needed to build a `Simulator`, kept apart from the `Simulator`
/// itself so they can cross a thread boundary.
///
/// A wired-up `Box<dyn Planner>` holds boxed sensor trait objects
/// (`Box<dyn WallsSensor>` etc., see `vc_planner::planner`) and those trait
/// objects carry no `Send` bound, so a constructed `Planner`/`Simulator`
/// cannot itself move between threads. Each worker instead receives the
/// planner's registered *name* and constructs its own instance, entirely
/// inside the thread that runs it (see `DESIGN.md`).
pub struct TaskSpec {
    pub planner_name: String,
    pub house_name: String,
    pub house: House,
    pub battery: Battery,
    pub max_steps: usize,
}

/// The published result of one task, however it ended.
#[derive(Clone, Debug)]
pub struct TaskOutcome {
    pub planner_name: String,
    pub house_name: String,
    pub score: u32,
    /// `None` when the task ended in error rather than a normal/dead status.
    pub status: Option<Status>,
    pub timed_out: bool,
    pub error: Option<String>,
    /// Full run detail (step history, dirt left, dock state) for a normal
    /// completion — `None` for a timeout or an error outcome, since neither
    /// leaves a final simulator state to report (§6.3 only specifies a
    /// per-simulation text artifact for a run that actually produced one).
    pub stats: Option<vc_sim::SimulationStatistics>,
}

/// Shared, `Arc`-owned state for one scheduled task. The worker thread and
/// the timer thread's `on_fire` callback each hold a clone; `ended` is the
/// CAS that decides which of them gets to publish the outcome.
pub(crate) struct TaskHandle {
    pub(crate) id: u64,
    pub(crate) planner_name: String,
    pub(crate) house_name: String,
    pub(crate) max_steps: usize,
    pub(crate) initial_dirt: u32,
    pub(crate) ended: AtomicBool,
    /// Populated once the worker has constructed its `Simulator`, so the
    /// timer's `on_fire` can request cooperative cancellation. `None` for a
    /// brief window before the worker reaches that point; armed only after,
    /// so a real fire never observes it empty.
    pub(crate) stop_flag: Mutex<Option<std::sync::Arc<AtomicBool>>>,
    outcome: Mutex<Option<TaskOutcome>>,
}

impl TaskHandle {
    pub(crate) fn new(id: u64, spec: &TaskSpec) -> Self {
        Self {
            id,
            planner_name: spec.planner_name.clone(),
            house_name: spec.house_name.clone(),
            max_steps: spec.max_steps,
            initial_dirt: spec.house.initial_dirt(),
            ended: AtomicBool::new(false),
            stop_flag: Mutex::new(None),
            outcome: Mutex::new(None),
        }
    }

    pub(crate) fn publish(&self, outcome: TaskOutcome) {
        *self.outcome.lock().expect("outcome mutex poisoned") = Some(outcome);
    }

    pub(crate) fn into_outcome(self) -> TaskOutcome {
        self.outcome
            .into_inner()
            .expect("outcome mutex poisoned")
            .expect("every task publishes an outcome before the latch reaches zero")
    }

    /// Clone the published outcome without consuming the handle — used when
    /// other `Arc<TaskHandle>` clones (timer thread, worker thread) may
    /// still be alive once the latch reaches zero.
    pub(crate) fn outcome_snapshot(&self) -> TaskOutcome {
        self.outcome
            .lock()
            .expect("outcome mutex poisoned")
            .clone()
            .expect("every task publishes an outcome before the latch reaches zero")
    }
}
