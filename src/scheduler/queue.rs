//! Deadline-ordered timer queue shared by the scheduler implementations

use super::traits::TimerEvent;
use std::time::Duration;

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    seq: u64,
    event: TimerEvent,
}

/// Pending timers keyed by deadline, ties broken by insertion order
#[derive(Debug, Clone, Default)]
pub(super) struct TimerQueue {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn push(&mut self, due: Duration, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { due, seq, event });
    }

    fn earliest(&self) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)
    }

    /// Remove and return the earliest event whose deadline is at or before `now`
    pub fn pop_due(&mut self, now: Duration) -> Option<TimerEvent> {
        let i = self.earliest()?;
        if self.pending[i].due <= now {
            Some(self.pending.remove(i).event)
        } else {
            None
        }
    }

    pub fn next_due_in(&self, now: Duration) -> Option<Duration> {
        self.earliest()
            .map(|i| self.pending[i].due.saturating_sub(now))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
