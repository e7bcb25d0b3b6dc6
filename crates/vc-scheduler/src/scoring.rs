//! Timeout scoring (§4.6's `Timeout` branch) — computed here rather than in
//! `vc_sim::scoring`, since only the scheduler knows a task was cancelled on
//! a deadline instead of reaching a terminal condition on its own.

const DIRT_FACTOR: u32 = 300;
const TIMEOUT_PENALTY: u32 = 2000;

pub fn timeout_score(max_steps: usize, initial_dirt: u32) -> u32 {
    2 * max_steps as u32 + initial_dirt * DIRT_FACTOR + TIMEOUT_PENALTY
}
