//! JSON REST handlers for the published dashboard summary.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use timedash_app::ports::SummaryStore;
use timedash_domain::stats::{StatRow, TimeStats};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the get and put endpoints.
pub enum SummaryResponse {
    Ok(Json<TimeStats>),
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the rows endpoint.
pub enum RowsResponse {
    Ok(Json<[StatRow; 4]>),
}

impl IntoResponse for RowsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/summary`
pub async fn get<S>(State(state): State<AppState<S>>) -> Result<SummaryResponse, ApiError>
where
    S: SummaryStore + Send + Sync + 'static,
{
    let stats = state.dashboard_service.current_summary().await?;
    Ok(SummaryResponse::Ok(Json(stats)))
}

/// `PUT /api/summary`
pub async fn put<S>(
    State(state): State<AppState<S>>,
    Json(stats): Json<TimeStats>,
) -> Result<SummaryResponse, ApiError>
where
    S: SummaryStore + Send + Sync + 'static,
{
    let stored = state.dashboard_service.publish_summary(stats).await?;
    Ok(SummaryResponse::Ok(Json(stored)))
}

/// `GET /api/summary/rows`
pub async fn rows<S>(State(state): State<AppState<S>>) -> Result<RowsResponse, ApiError>
where
    S: SummaryStore + Send + Sync + 'static,
{
    let rows = state.dashboard_service.stat_rows().await?;
    Ok(RowsResponse::Ok(Json(rows)))
}
