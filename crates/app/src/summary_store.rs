//! In-process summary slot backed by a tokio [`RwLock`].

use tokio::sync::RwLock;

use timedash_domain::error::TimeDashError;
use timedash_domain::stats::TimeStats;

use crate::ports::SummaryStore;

/// Keeps the latest summary in memory.
///
/// Nothing is persisted: a restart starts again from the initial summary.
#[derive(Debug, Default)]
pub struct InMemorySummaryStore {
    current: RwLock<TimeStats>,
}

impl InMemorySummaryStore {
    /// Create a store holding `initial` until the first publish.
    #[must_use]
    pub fn new(initial: TimeStats) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }
}

impl SummaryStore for InMemorySummaryStore {
    async fn load(&self) -> Result<TimeStats, TimeDashError> {
        Ok(self.current.read().await.clone())
    }

    async fn save(&self, stats: TimeStats) -> Result<TimeStats, TimeDashError> {
        let mut current = self.current.write().await;
        *current = stats.clone();
        Ok(stats)
    }
}
