use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info};

/// Placeholder used when no trusted proxy header identifies the client.
const UNKNOWN_IP: &str = "unknown";

/// Logs every inbound request before it reaches its handler. Runs for every
/// request regardless of outcome and never aborts dispatch.
pub async fn log_request(request: Request, next: Next) -> Response {
    let ip = request
        .headers()
        .get("x-real-ip")
        .and_then(|value| value.to_str().ok())
        .unwrap_or(UNKNOWN_IP)
        .to_string();

    info!(
        ip = %ip,
        method = %request.method(),
        path = %request.uri().path(),
        headers = ?request.headers(),
        "incoming request"
    );

    let response = next.run(request).await;

    // Post-response hook; extend here if outcome logging is ever needed.
    debug!(ip = %ip, status = %response.status(), "request completed");

    response
}
