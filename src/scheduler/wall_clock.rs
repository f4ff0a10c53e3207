//! Real-time scheduler backed by the monotonic clock

use super::queue::TimerQueue;
use super::traits::{Scheduler, TimerEvent};
use std::time::{Duration, Instant};

/// Scheduler that waits for real
pub struct WallClockScheduler {
    started: Instant,
    queue: TimerQueue,
}

impl WallClockScheduler {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            queue: TimerQueue::default(),
        }
    }
}

impl Default for WallClockScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for WallClockScheduler {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }

    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        log::debug!("Scheduling {:?} in {:?}", event, delay);
        self.queue.push(self.now() + delay, event);
    }

    fn pop_due(&mut self) -> Option<TimerEvent> {
        let now = self.now();
        self.queue.pop_due(now)
    }

    fn next_due_in(&self) -> Option<Duration> {
        self.queue.next_due_in(self.now())
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }

    fn pending(&self) -> usize {
        self.queue.len()
    }
}
