//! The scheduler's single dedicated timer thread (§4.7, §5).
//!
//! `original_source/src/task_queue.h` arms one `boost::asio` timer per task
//! against a shared `io_context` run by one event-loop thread "not counted
//! in the number of active threads." Rust has no `boost::asio` equivalent in
//! the ecosystem this crate otherwise draws from, so the same shape is built
//! directly: one thread, one min-heap of `(deadline, task_id)` pairs, woken
//! by a `Condvar` whenever a new deadline is armed or the soonest one
//! elapses. Rearming a task's deadline is not supported (§5) — each task is
//! armed exactly once.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

struct Shared {
    heap: Mutex<BinaryHeap<Reverse<(Instant, u64)>>>,
    wake: Condvar,
    stopped: AtomicBool,
}

/// A cloneable handle for arming deadlines, independent of the thread that
/// services them.
#[derive(Clone)]
pub struct TimerHandle {
    shared: Arc<Shared>,
}

impl TimerHandle {
    /// Arm a one-shot deadline for `task_id`, `duration` from now.
    pub fn arm(&self, task_id: u64, duration: Duration) {
        let mut heap = self.shared.heap.lock().expect("timer mutex poisoned");
        heap.push(Reverse((Instant::now() + duration, task_id)));
        self.shared.wake.notify_one();
    }
}

/// Owns the timer thread; dropping a handle obtained from [`Self::handle`]
/// does not stop it — call [`Self::stop`] once every task has ended.
pub struct TimerThread {
    handle: TimerHandle,
    join_handle: Option<JoinHandle<()>>,
}

impl TimerThread {
    /// Spawn the timer thread. `on_fire(task_id)` runs on the timer thread
    /// itself whenever a deadline elapses — the scheduler uses it to perform
    /// the timeout side of the §4.7 CAS race, which makes a stale fire for an
    /// already-ended task a cheap no-op rather than something this queue
    /// needs to cancel explicitly.
    pub fn spawn(on_fire: impl Fn(u64) + Send + 'static) -> Self {
        let shared = Arc::new(Shared {
            heap: Mutex::new(BinaryHeap::new()),
            wake: Condvar::new(),
            stopped: AtomicBool::new(false),
        });

        let worker_shared = shared.clone();
        let join_handle = std::thread::spawn(move || Self::drive(worker_shared, on_fire));

        Self { handle: TimerHandle { shared }, join_handle: Some(join_handle) }
    }

    fn drive(shared: Arc<Shared>, on_fire: impl Fn(u64)) {
        loop {
            let mut heap = shared.heap.lock().expect("timer mutex poisoned");
            let task_id = loop {
                if shared.stopped.load(Ordering::Relaxed) {
                    return;
                }
                match heap.peek() {
                    None => heap = shared.wake.wait(heap).expect("timer mutex poisoned"),
                    Some(Reverse((at, _))) => {
                        let now = Instant::now();
                        if *at <= now {
                            let Reverse((_, task_id)) = heap.pop().expect("peeked Some above");
                            break task_id;
                        }
                        heap = shared.wake.wait_timeout(heap, *at - now).expect("timer mutex poisoned").0;
                    }
                }
            };
            drop(heap);
            on_fire(task_id);
        }
    }

    /// A cloneable handle other threads can use to arm deadlines.
    pub fn handle(&self) -> TimerHandle {
        self.handle.clone()
    }

    /// Stop the thread and join it. Per §4.7, this runs once the latch has
    /// reached zero — every task has already published an outcome.
    pub fn stop(mut self) {
        self.handle.shared.stopped.store(true, Ordering::Relaxed);
        self.handle.shared.wake.notify_all();
        if let Some(join_handle) = self.join_handle.take() {
            let _ = join_handle.join();
        }
    }
}
