use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

/// Logs every request once it completes: a fresh request id, the matched
/// route (not the raw path, so ids don't explode log cardinality), status
/// and latency. Severity follows the status class.
pub async fn request_logger(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4();

    let response = next.run(req).await;
    let status = response.status().as_u16();
    let latency_ms = start.elapsed().as_millis();

    if response.status().is_server_error() {
        error!(%request_id, %method, %path, status, latency_ms, "Request failed");
    } else if response.status().is_client_error() {
        warn!(%request_id, %method, %path, status, latency_ms, "Request rejected");
    } else {
        info!(%request_id, %method, %path, status, latency_ms, "Request completed");
    }

    response
}
