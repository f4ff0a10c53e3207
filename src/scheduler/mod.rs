//! Timer scheduling
//!
//! The spin sequence is driven by two delays. This module provides a
//! trait-based "after delay, fire event" primitive so the engine can run
//! against real wall-clock time or a simulated clock that tests advance by
//! hand.

mod manual;
mod queue;
mod traits;
mod wall_clock;

pub use manual::ManualScheduler;
pub use traits::{Scheduler, TimerEvent};
pub use wall_clock::WallClockScheduler;
