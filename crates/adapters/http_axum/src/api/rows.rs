//! Stateless row projection for arbitrary summaries.

use axum::Json;
use axum::extract::State;

use timedash_app::ports::SummaryStore;
use timedash_domain::stats::TimeStats;

use super::summary::RowsResponse;
use crate::state::AppState;

/// `POST /api/rows/preview`
///
/// Projects the posted summary without storing it.
pub async fn preview<S>(
    State(state): State<AppState<S>>,
    Json(stats): Json<TimeStats>,
) -> RowsResponse
where
    S: SummaryStore + Send + Sync + 'static,
{
    RowsResponse::Ok(Json(state.dashboard_service.preview_rows(&stats)))
}
