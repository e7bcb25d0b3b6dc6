//! `vc-scheduler` — the bounded-concurrency runner across every
//! `(planner, house)` pairing (§4.7, §5).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|-----------------------------------------------------------|
//! | [`task`]      | `TaskSpec`, `TaskOutcome`, `TaskHandle`                    |
//! | [`timer`]     | `TimerThread` — the single dedicated deadline-servicing thread |
//! | [`semaphore`] | `Semaphore` — throttles concurrent workers                 |
//! | [`latch`]     | `Latch` — blocks until every task has published an outcome  |
//! | [`scoring`]   | `timeout_score`                                             |
//! | [`error`]     | `SchedulerError`, `SchedulerResult`                        |
//!
//! [`Scheduler::run`] wires the pieces together, following
//! `original_source/src/task_queue.cc`: acquire a semaphore permit, spawn a
//! worker thread per task, arm that task's timer, and race the worker's
//! normal completion against the timer firing via a CAS on
//! [`task::TaskHandle::ended`]. A constructed `Planner`/`Simulator` holds
//! `Box<dyn Trait>` sensors with no `Send` bound and so cannot itself cross
//! the thread boundary (see DESIGN.md); each worker instead receives the
//! planner's registered name and builds its own instance, entirely inside
//! the thread that runs it.

pub mod error;
pub mod latch;
pub mod scoring;
pub mod semaphore;
pub mod task;
pub mod timer;

#[cfg(test)]
mod tests;

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use vc_planner::Planner;
use vc_sim::Simulator;

pub use error::{SchedulerError, SchedulerResult};
pub use task::{TaskOutcome, TaskSpec};

use latch::Latch;
use semaphore::Semaphore;
use task::TaskHandle;
use timer::{TimerHandle, TimerThread};

/// Milliseconds of wall-clock deadline per allowed step (§5).
const MS_PER_STEP: u64 = 1;

/// Constructs a planner instance by its registered name. Matches
/// `vc_planner::registry::create`'s signature so the registrar can be
/// passed directly as the default factory.
pub type PlannerFactory = fn(&str) -> Option<Box<dyn Planner>>;

/// Bounded-concurrency runner across every `(planner, house)` pairing.
///
/// Construct with [`Scheduler::new`] (or [`Scheduler::with_registry`] to
/// resolve planner names through the process-wide registrar), passing the
/// complete list of [`TaskSpec`]s and a worker count. [`Scheduler::run`]
/// drives every task to completion (or timeout) and returns their outcomes.
pub struct Scheduler {
    specs: Vec<TaskSpec>,
    num_workers: usize,
    planner_factory: PlannerFactory,
}

impl Scheduler {
    /// `num_workers` is clamped to at least 1 — §6.4 requires `-num_threads
    /// >= 1`; a caller passing `0` would otherwise deadlock forever on the
    /// semaphore.
    pub fn new(specs: Vec<TaskSpec>, num_workers: usize, planner_factory: PlannerFactory) -> Self {
        Self { specs, num_workers: num_workers.max(1), planner_factory }
    }

    /// Resolve planner names through [`vc_planner::registry::create`].
    pub fn with_registry(specs: Vec<TaskSpec>, num_workers: usize) -> Self {
        Self::new(specs, num_workers, vc_planner::registry::create)
    }

    /// Run every task to completion. The returned vector is in submission
    /// order; per §5, no ordering is specified *while* tasks run, but the
    /// aggregate summary keys outcomes by `(planner_name, house_name)`
    /// regardless, so submission order is only a convenience here, not a
    /// guarantee callers should depend on for correctness.
    pub fn run(self) -> Vec<TaskOutcome> {
        let num_tasks = self.specs.len();
        log::info!("scheduler starting: {num_tasks} tasks, {} workers", self.num_workers);

        let handles: Vec<Arc<TaskHandle>> =
            self.specs.iter().enumerate().map(|(i, spec)| Arc::new(TaskHandle::new(i as u64, spec))).collect();

        let semaphore = Arc::new(Semaphore::new(self.num_workers));
        let latch = Arc::new(Latch::new(num_tasks));

        let timer_handles = handles.clone();
        let timer_latch = latch.clone();
        let timer_semaphore = semaphore.clone();
        let timer = TimerThread::spawn(move |task_id| {
            on_timer_fire(&timer_handles[task_id as usize], &timer_latch, &timer_semaphore)
        });
        let timer_handle = timer.handle();

        for (id, spec) in self.specs.into_iter().enumerate() {
            semaphore.acquire();

            let handle = handles[id].clone();
            let latch = latch.clone();
            let semaphore = semaphore.clone();
            let timer_handle = timer_handle.clone();
            let planner_factory = self.planner_factory;
            let task_id = id as u64;
            let deadline = Duration::from_millis(spec.max_steps as u64 * MS_PER_STEP);

            // Deliberately not joined: a planner that ignores its
            // cooperative stop flag can block inside `next_step()`
            // indefinitely (§9 — Rust has no portable forcible-cancel of a
            // running synchronous thread), and `run()` must still return
            // once every task has *published* an outcome, not once every
            // worker thread has actually exited. The latch below is the
            // only join point that matters.
            std::thread::Builder::new()
                .name(format!("vc-sim-{task_id}"))
                .spawn(move || {
                    run_worker(task_id, spec, planner_factory, &handle, &latch, &semaphore, &timer_handle, deadline)
                })
                .expect("failed to spawn worker thread");
        }

        latch.wait();
        log::info!("all tasks finished running");

        timer.stop();
        log::info!("timer thread stopped");

        handles.iter().map(|handle| handle.outcome_snapshot()).collect()
    }
}

/// Runs on the timer thread when a task's deadline elapses.
fn on_timer_fire(handle: &Arc<TaskHandle>, latch: &Latch, semaphore: &Semaphore) {
    if handle.ended.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_err() {
        return; // Already ended normally; a stale fire is a no-op (§5).
    }

    log::warn!("task {} ({}@{}) timed out", handle.id, handle.planner_name, handle.house_name);

    if let Some(stop_flag) = handle.stop_flag.lock().expect("stop flag mutex poisoned").as_ref() {
        stop_flag.store(true, Ordering::Relaxed);
    }

    let score = scoring::timeout_score(handle.max_steps, handle.initial_dirt);
    handle.publish(TaskOutcome {
        planner_name: handle.planner_name.clone(),
        house_name: handle.house_name.clone(),
        score,
        status: None,
        timed_out: true,
        error: None,
        stats: None,
    });
    latch.count_down();
    semaphore.release();
}

/// Runs on a worker thread: builds the planner/simulator from `spec` and
/// drives it to completion, then races the CAS against a possible timeout.
#[allow(clippy::too_many_arguments)]
fn run_worker(
    task_id: u64,
    spec: TaskSpec,
    planner_factory: PlannerFactory,
    handle: &Arc<TaskHandle>,
    latch: &Latch,
    semaphore: &Semaphore,
    timer_handle: &TimerHandle,
    deadline: Duration,
) {
    log::info!("task {task_id} ({}@{}) starting", spec.planner_name, spec.house_name);
    timer_handle.arm(task_id, deadline);

    let planner_name = spec.planner_name.clone();
    let house_name = spec.house_name.clone();

    // §4.7: "Worker panic ... is treated as a fatal programming error; it
    // still must release semaphore and decrement latch." Catching the
    // unwind here (rather than relying on a Drop-based scope guard) keeps
    // that discipline local to this one function: whatever happens inside
    // `build_and_run`, the CAS/publish/countdown/release below always runs.
    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| build_and_run(spec, planner_factory, handle)))
        .unwrap_or_else(|payload| {
            let err = SchedulerError::WorkerPanicked(task_id, panic_message(&payload));
            log::error!("task {task_id} ({planner_name}@{house_name}) panicked: {err}");
            TaskOutcome {
                planner_name,
                house_name,
                score: 0,
                status: None,
                timed_out: false,
                error: Some(err.to_string()),
                stats: None,
            }
        });

    if handle.ended.compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst).is_ok() {
        handle.publish(outcome);
        latch.count_down();
        semaphore.release();
    }
    // Else the timer already won the race and published a timeout outcome
    // (§4.7: exactly one of {normal-completion, timeout} wins per task);
    // this worker's own result is simply discarded.
}

/// Best-effort extraction of a human-readable message from a caught panic
/// payload (`&str` and `String` cover every `panic!`/`.unwrap()` case).
fn panic_message(payload: &Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "worker thread panicked with a non-string payload".to_string()
    }
}

fn build_and_run(spec: TaskSpec, planner_factory: PlannerFactory, handle: &TaskHandle) -> TaskOutcome {
    let planner_name = spec.planner_name.clone();
    let house_name = spec.house_name.clone();
    let max_steps = spec.max_steps;

    let failed = |message: String| TaskOutcome {
        planner_name: planner_name.clone(),
        house_name: house_name.clone(),
        score: 0,
        status: None,
        timed_out: false,
        error: Some(message),
        stats: None,
    };

    let Some(planner) = planner_factory(&planner_name) else {
        let err = SchedulerError::PlannerNotFound(planner_name.clone());
        log::error!("{err}");
        return failed(err.to_string());
    };

    let mut simulator = match Simulator::new(planner, spec.house, spec.battery, max_steps) {
        Ok(simulator) => simulator,
        Err(err) => {
            let err = SchedulerError::from(err);
            log::error!("task {planner_name}@{house_name} failed to initialize: {err}");
            return failed(err.to_string());
        }
    };

    *handle.stop_flag.lock().expect("stop flag mutex poisoned") = Some(simulator.cancellation_handle());

    match simulator.run() {
        Ok(stats) => TaskOutcome {
            planner_name,
            house_name,
            score: stats.score,
            status: Some(stats.status),
            timed_out: false,
            error: None,
            stats: Some(stats),
        },
        Err(err) => {
            let err = SchedulerError::from(err);
            log::error!("task {planner_name}@{house_name} raised during run: {err}");
            failed(err.to_string())
        }
    }
}
