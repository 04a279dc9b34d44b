//! Summary store port — where the latest dashboard summary lives.

use std::future::Future;

use timedash_domain::error::TimeDashError;
use timedash_domain::stats::TimeStats;

/// Holds the most recently published [`TimeStats`].
///
/// Exactly one summary is kept; saving replaces it.
pub trait SummaryStore {
    /// Read the current summary.
    fn load(&self) -> impl Future<Output = Result<TimeStats, TimeDashError>> + Send;

    /// Replace the current summary and return what was stored.
    fn save(&self, stats: TimeStats)
    -> impl Future<Output = Result<TimeStats, TimeDashError>> + Send;
}
