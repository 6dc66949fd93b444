use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use file_router::{handler_fn, HandlerDescriptor};
use serde_json::json;

pub fn descriptor() -> HandlerDescriptor {
    HandlerDescriptor::new("App\\Controller\\IndexController")
        .action(
            "index",
            handler_fn(|_req| async {
                Ok(Json(json!({
                    "service": "file-router",
                    "version": env!("CARGO_PKG_VERSION"),
                }))
                .into_response())
            }),
        )
        .action(
            "head",
            handler_fn(|_req| async { Ok(StatusCode::OK.into_response()) }),
        )
        .action(
            "options",
            handler_fn(|_req| async {
                Ok((StatusCode::NO_CONTENT, [(header::ALLOW, "GET, HEAD, OPTIONS")]).into_response())
            }),
        )
}
