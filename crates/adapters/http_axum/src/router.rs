//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use timedash_app::ports::SummaryStore;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` next to a `/health` probe.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: SummaryStore + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the compiled dashboard from `assets_dir` for every unmatched path.
///
/// Unknown paths fall back to `index.html` so the client-side router can
/// resolve `/dashboard/time` and friends.
pub fn with_dashboard_assets(router: Router, assets_dir: impl AsRef<Path>) -> Router {
    let assets_dir = assets_dir.as_ref();
    let index = assets_dir.join("index.html");
    router.fallback_service(ServeDir::new(assets_dir).fallback(ServeFile::new(index)))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use timedash_app::services::dashboard_service::DashboardService;
    use timedash_app::summary_store::InMemorySummaryStore;
    use timedash_domain::error::{StorageError, TimeDashError};
    use timedash_domain::stats::TimeStats;
    use tower::ServiceExt;

    struct BrokenStore;

    impl SummaryStore for BrokenStore {
        async fn load(&self) -> Result<TimeStats, TimeDashError> {
            Err(StorageError {
                reason: "disk on fire".to_string(),
            }
            .into())
        }

        async fn save(&self, _stats: TimeStats) -> Result<TimeStats, TimeDashError> {
            Err(StorageError {
                reason: "disk on fire".to_string(),
            }
            .into())
        }
    }

    fn test_app() -> Router {
        build(AppState::new(DashboardService::new(
            InMemorySummaryStore::default(),
        )))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let response = test_app().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_idle_summary_before_first_publish() {
        let response = test_app()
            .oneshot(get_request("/api/summary"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total_entries"], 0);
        assert!(body["active_entry"].is_null());
    }

    #[tokio::test]
    async fn should_store_published_summary() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/summary",
                r#"{"total_hours_today":2.35,"total_entries":1,"weekly_hours":7.8}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/api/summary")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total_entries"], 1);
        assert_eq!(body["weekly_hours"], 7.8);
    }

    #[tokio::test]
    async fn should_project_rows_from_published_summary() {
        let app = test_app();
        app.clone()
            .oneshot(json_request(
                "PUT",
                "/api/summary",
                r#"{
                    "total_hours_today": 2.35,
                    "total_entries": 1,
                    "active_entry": {
                        "id": "6f1c2a57-3d43-4c1e-9a37-2b8f0d5e9c11",
                        "started_at": "2026-10-16T08:30:00Z"
                    },
                    "weekly_hours": 7.8
                }"#,
            ))
            .await
            .unwrap();

        let response = app.oneshot(get_request("/api/summary/rows")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let rows = body_json(response).await;
        assert_eq!(rows.as_array().unwrap().len(), 4);
        assert_eq!(rows[0]["value"], "2.4h");
        assert_eq!(rows[0]["sub_label"], "1 session");
        assert_eq!(rows[1]["value"], "Running");
        assert_eq!(rows[1]["color"], "green");
        assert_eq!(rows[2]["value"], "8h");
        assert_eq!(rows[3]["action"]["kind"], "navigate");
        assert_eq!(rows[3]["action"]["href"], "/dashboard/time/reports");
    }

    #[tokio::test]
    async fn should_reject_negative_hours_with_bad_request() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/summary",
                r#"{"weekly_hours":-3.0}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "`weekly_hours` must not be negative");

        let response = app.oneshot(get_request("/api/summary")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["weekly_hours"], 0.0);
    }

    #[tokio::test]
    async fn should_reject_malformed_json() {
        let response = test_app()
            .oneshot(json_request("PUT", "/api/summary", "{not json"))
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn should_preview_rows_without_storing() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/rows/preview",
                r#"{"total_entries":5}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let rows = body_json(response).await;
        assert_eq!(rows[0]["sub_label"], "5 sessions");
        assert_eq!(rows[1]["value"], "Stopped");

        let response = app.oneshot(get_request("/api/summary")).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["total_entries"], 0);
    }

    #[tokio::test]
    async fn should_hide_storage_errors_behind_internal_server_error() {
        let app = build(AppState::new(DashboardService::new(BrokenStore)));

        let response = app.oneshot(get_request("/api/summary/rows")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal server error");
    }

    #[tokio::test]
    async fn should_serve_index_for_client_side_routes() {
        let dir = std::env::temp_dir().join(format!("timedash-assets-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>timedash</html>").unwrap();

        let app = with_dashboard_assets(test_app(), &dir);

        let response = app
            .clone()
            .oneshot(get_request("/dashboard/time"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"<html>timedash</html>");

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
