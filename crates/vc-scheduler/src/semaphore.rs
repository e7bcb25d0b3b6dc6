//! A counting semaphore built from `Mutex`/`Condvar`.
//!
//! `std` has no stable equivalent of C++'s `std::counting_semaphore`, which
//! `original_source/src/task_queue.h` uses to throttle concurrent workers
//! (§4.7, §5) — this reproduces the same acquire/release discipline on top
//! of the primitives `std::sync` does offer.

use std::sync::{Condvar, Mutex};

pub struct Semaphore {
    permits: Mutex<usize>,
    available: Condvar,
}

impl Semaphore {
    pub fn new(permits: usize) -> Self {
        Self { permits: Mutex::new(permits), available: Condvar::new() }
    }

    /// Block until a permit is free, then take it.
    pub fn acquire(&self) {
        let mut permits = self.permits.lock().expect("semaphore mutex poisoned");
        while *permits == 0 {
            permits = self.available.wait(permits).expect("semaphore mutex poisoned");
        }
        *permits -= 1;
    }

    /// Return a permit and wake one waiter.
    pub fn release(&self) {
        let mut permits = self.permits.lock().expect("semaphore mutex poisoned");
        *permits += 1;
        self.available.notify_one();
    }
}
