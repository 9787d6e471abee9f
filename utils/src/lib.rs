//! Shared utilities for the homework-bot workspace.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix time in whole seconds.
///
/// A clock set before the epoch yields 0 rather than failing; the API treats
/// `from_date=0` as "everything".
pub fn now_unix_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
