//! Shared application state for axum handlers.

use std::sync::Arc;

use timedash_app::ports::SummaryStore;
use timedash_app::services::dashboard_service::DashboardService;

/// Application state shared across all axum handlers.
///
/// Generic over the summary store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Summary publishing and projection service.
    pub dashboard_service: Arc<DashboardService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            dashboard_service: Arc::clone(&self.dashboard_service),
        }
    }
}

impl<S> AppState<S>
where
    S: SummaryStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(dashboard_service: DashboardService<S>) -> Self {
        Self {
            dashboard_service: Arc::new(dashboard_service),
        }
    }
}
