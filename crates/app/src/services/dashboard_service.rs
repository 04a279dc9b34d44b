//! Dashboard service — use-cases behind the time dashboard summary cards.

use timedash_domain::error::TimeDashError;
use timedash_domain::stats::{self, StatRow, TimeStats};

use crate::ports::SummaryStore;

/// Application service connecting the summary publisher to the dashboard views.
pub struct DashboardService<S> {
    store: S,
}

impl<S: SummaryStore> DashboardService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Return the most recently published summary.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn current_summary(&self) -> Result<TimeStats, TimeDashError> {
        self.store.load().await
    }

    /// Validate and store a new summary, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`TimeDashError::Validation`] if an hour amount is negative or
    /// not finite (the stored summary is left untouched), or a storage error
    /// from the store.
    pub async fn publish_summary(&self, stats: TimeStats) -> Result<TimeStats, TimeDashError> {
        stats.validate()?;
        let stored = self.store.save(stats).await?;
        tracing::info!(
            tracking = stored.is_tracking(),
            total_entries = stored.total_entries,
            "summary published"
        );
        Ok(stored)
    }

    /// Project the current summary into dashboard rows.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    pub async fn stat_rows(&self) -> Result<[StatRow; 4], TimeDashError> {
        let stats = self.store.load().await?;
        Ok(stats::project(&stats))
    }

    /// Project an arbitrary summary without storing it.
    #[must_use]
    pub fn preview_rows(&self, stats: &TimeStats) -> [StatRow; 4] {
        tracing::debug!(tracking = stats.is_tracking(), "previewing stat rows");
        stats::project(stats)
    }
}
