//! Request tracing middleware
//!
//! Replaces the access-log line a typical HTTP logger would emit: one
//! structured event per completed request with method, path, status, and
//! latency, leveled by status class.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn request_tracing(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed_ms = start.elapsed().as_millis();

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), %elapsed_ms, "request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, status = status.as_u16(), %elapsed_ms, "request rejected");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), %elapsed_ms, "request completed");
    }

    response
}
