//! Logging middleware for request/response tracing.
//!
//! Each request runs inside an `http_request` span carrying the method, path
//! and request ID, so logs from the pipeline below are correlated.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{Instrument, info, info_span};

use super::RequestId;

/// Fallback request ID when the request ID middleware did not run.
const UNKNOWN_REQUEST_ID: &str = "unknown";

/// Logs one line when a request arrives and one when its response leaves,
/// with status and latency.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request_id_of(&request);

    let span = info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id
    );

    async move {
        info!("Request received");

        let start = Instant::now();
        let response = next.run(request).await;

        info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Response sent"
        );
        response
    }
    .instrument(span)
    .await
}

fn request_id_of(request: &Request) -> String {
    request
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_else(|| UNKNOWN_REQUEST_ID.to_string())
}
