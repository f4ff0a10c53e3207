//! Simulated-time scheduler
//!
//! Time only moves when someone calls `advance` (or `sleep`), so a five
//! second spin completes instantly and deterministically.

use super::queue::TimerQueue;
use super::traits::{Scheduler, TimerEvent};
use std::time::Duration;

/// Scheduler driven by a manually advanced clock
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    now: Duration,
    queue: TimerQueue,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the simulated clock forward
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        log::debug!("Scheduling {:?} at {:?} (simulated)", event, self.now + delay);
        self.queue.push(self.now + delay, event);
    }

    fn pop_due(&mut self) -> Option<TimerEvent> {
        self.queue.pop_due(self.now)
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.queue.next_due_in(self.now)
    }

    fn sleep(&mut self, duration: Duration) {
        self.advance(duration);
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
