//! HTTP API client wrapping `gloo-net` for calls to `/api/*`.

use gloo_net::http::{Request, Response};
use serde::Deserialize;
use timedash_domain::stats::TimeStats;

/// Error returned by API client methods.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// JSON error body returned by the server on non-2xx responses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("HTTP {}", resp.status()),
    };
    Err(ApiError { message })
}

/// Fetch the latest published summary.
pub async fn fetch_summary() -> Result<TimeStats, ApiError> {
    let resp = check_response(Request::get("/api/summary").send().await?).await?;
    let stats: TimeStats = resp.json().await?;
    Ok(stats)
}
