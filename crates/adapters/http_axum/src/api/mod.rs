//! JSON REST API handler modules.

pub mod rows;
#[allow(clippy::missing_errors_doc)]
pub mod summary;

use axum::Router;
use axum::routing::{get, post};

use timedash_app::ports::SummaryStore;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: SummaryStore + Send + Sync + 'static,
{
    Router::new()
        .route("/summary", get(summary::get::<S>).put(summary::put::<S>))
        .route("/summary/rows", get(summary::rows::<S>))
        .route("/rows/preview", post(rows::preview::<S>))
}
