use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use file_router::{handler_fn, HandlerDescriptor};
use serde_json::json;

use super::middleware::timed;

/// `/blog/post` with its own method table: GET lists, POST publishes.
pub fn post_descriptor() -> HandlerDescriptor {
    HandlerDescriptor::new("App\\Controller\\Blog\\PostController")
        .map_method(Method::GET, "list")
        .map_method(Method::POST, "publish")
        .action(
            "list",
            handler_fn(|_req| async {
                Ok(Json(json!([{ "slug": "hello-world", "title": "Hello, world" }])).into_response())
            }),
        )
        .action(
            "publish",
            handler_fn(|_req| async { Ok(StatusCode::ACCEPTED.into_response()) }),
        )
        .middleware("publish", timed("blog.post.publish"))
}
