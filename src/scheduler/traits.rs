//! Scheduler trait definitions

use std::time::Duration;

/// Something the engine asked to be told about later
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Spin animation finished, time to pick an entry
    SpinElapsed { spin: u64 },

    /// Reveal delay finished for the entry picked at `index`
    RevealElapsed { spin: u64, index: usize },
}

/// Timer scheduler trait - allows swapping between wall-clock and simulated time
///
/// Events never fire on their own. The owner polls with [`Scheduler::pop_due`]
/// and lets time pass with [`Scheduler::sleep`].
pub trait Scheduler {
    /// Time elapsed since the scheduler was created
    fn now(&self) -> Duration;

    /// Arrange for `event` to become due once `delay` has elapsed
    fn schedule(&mut self, delay: Duration, event: TimerEvent);

    /// Take the earliest event that is due, if any
    fn pop_due(&mut self) -> Option<TimerEvent>;

    /// Time left until the earliest pending event (zero if already due)
    fn next_due_in(&self) -> Option<Duration>;

    /// Let `duration` pass
    fn sleep(&mut self, duration: Duration);

    /// Number of events still pending
    fn pending(&self) -> usize;
}
