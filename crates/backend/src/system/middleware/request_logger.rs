use axum::body::{Body, HttpBody};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_bytes;

/// Logs every HTTP request: duration, response size, status, method and path.
///
/// Non-2xx responses are logged at `warn`.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let elapsed_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();
    let size = response
        .body()
        .size_hint()
        .exact()
        .map(format_bytes)
        .unwrap_or_else(|| "stream".to_string());

    if response.status().is_success() {
        tracing::info!(target: "http", "{:>5}ms | {:>9} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    } else {
        tracing::warn!(target: "http", "{:>5}ms | {:>9} | {} {:>6} {}", elapsed_ms, size, status, method, path);
    }

    response
}
