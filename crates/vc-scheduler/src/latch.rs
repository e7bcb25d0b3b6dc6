//! A single-use countdown latch built from `Mutex`/`Condvar`, standing in
//! for C++'s `std::latch` (`original_source/src/task_queue.h`'s
//! `todo_tasks_counter`, §4.7).

use std::sync::{Condvar, Mutex};

pub struct Latch {
    remaining: Mutex<usize>,
    zero: Condvar,
}

impl Latch {
    pub fn new(count: usize) -> Self {
        Self { remaining: Mutex::new(count), zero: Condvar::new() }
    }

    /// Decrement by one; wakes any `wait()`er once the count reaches zero.
    pub fn count_down(&self) {
        let mut remaining = self.remaining.lock().expect("latch mutex poisoned");
        *remaining = remaining.saturating_sub(1);
        if *remaining == 0 {
            self.zero.notify_all();
        }
    }

    /// Block until the count reaches zero.
    pub fn wait(&self) {
        let mut remaining = self.remaining.lock().expect("latch mutex poisoned");
        while *remaining > 0 {
            remaining = self.zero.wait(remaining).expect("latch mutex poisoned");
        }
    }
}
