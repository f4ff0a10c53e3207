//! Engine configuration

use std::time::Duration;

/// Smallest playlist a spin is allowed on
pub const DEFAULT_MIN_ENTRIES: usize = 2;

/// How long the spin animation runs before an entry is picked
pub const DEFAULT_SPIN_DURATION: Duration = Duration::from_millis(5000);

/// Pause between picking an entry and revealing its video
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for the selection engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Minimum playlist size for `spin()`; smaller loads produce a warning
    pub min_entries: usize,

    /// Delay from `spin()` to the pick
    pub spin_duration: Duration,

    /// Delay from the pick to the reveal
    pub reveal_delay: Duration,
}

impl EngineConfig {
    /// Create a configuration with the standard timings
    pub fn new() -> Self {
        Self {
            min_entries: DEFAULT_MIN_ENTRIES,
            spin_duration: DEFAULT_SPIN_DURATION,
            reveal_delay: DEFAULT_REVEAL_DELAY,
        }
    }

    /// Set the minimum playlist size (values below 1 are raised to 1)
    pub fn with_min_entries(mut self, min_entries: usize) -> Self {
        self.min_entries = min_entries.max(1);
        self
    }

    /// Set the spin duration
    pub fn with_spin_duration(mut self, duration: Duration) -> Self {
        self.spin_duration = duration;
        self
    }

    /// Set the reveal delay
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
