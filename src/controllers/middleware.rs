use std::time::Instant;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::IntoResponse;
use file_router::{middleware_fn, Middleware, Next};

/// Reject requests whose body is not declared as JSON.
pub fn require_json() -> impl Middleware + 'static {
    middleware_fn("require_json", |req: Request<Body>, next: Next| async move {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false);

        if !is_json {
            return Ok((StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected application/json").into_response());
        }
        next.handle(req).await
    })
}

/// Log how long the rest of the chain took.
pub fn timed(label: &'static str) -> impl Middleware + 'static {
    middleware_fn("timed", move |req: Request<Body>, next: Next| async move {
        let start = Instant::now();
        let result = next.handle(req).await;
        tracing::debug!(action = label, elapsed = ?start.elapsed(), "Action finished");
        result
    })
}
