//! Configuration types for the homework tracker.

use std::time::Duration;

/// Default pause between the end of one poll cycle and the start of the next.
pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Configuration for Tracker (parameters only; clients are passed to `Tracker::new`).
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Sleep after every cycle, whatever its outcome
    pub retry_period: Duration,
    /// Reject responses without an integer `current_date`
    pub require_current_date: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            retry_period: DEFAULT_RETRY_PERIOD,
            require_current_date: false,
        }
    }
}
