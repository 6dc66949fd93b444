//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use file_router::{handler_fn, middleware_fn, Middleware, Next, RequestHandler};

/// Ordered record of which stages ran.
pub type Log = Arc<Mutex<Vec<String>>>;

/// A fallback returning 404 that counts its invocations.
pub struct Fallback {
    pub calls: Arc<AtomicUsize>,
    pub handler: Arc<dyn RequestHandler>,
}

impl Fallback {
    pub fn new() -> Self {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let handler = Arc::new(handler_fn(move |_req| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok((StatusCode::NOT_FOUND, "fallback").into_response()) }
        }));
        Self { calls, handler }
    }

    pub fn handler(&self) -> Arc<dyn RequestHandler> {
        Arc::clone(&self.handler)
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// An action that records itself and answers with `body`.
pub fn text_action(body: &'static str, log: &Log) -> impl RequestHandler + 'static {
    let log = Arc::clone(log);
    handler_fn(move |_req| {
        log.lock().unwrap().push(body.to_string());
        async move { Ok(body.into_response()) }
    })
}

/// A pass-through middleware that records its name.
pub fn recording(name: &'static str, log: &Log) -> impl Middleware + 'static {
    let log = Arc::clone(log);
    middleware_fn(name, move |req, next: Next| {
        log.lock().unwrap().push(name.to_string());
        async move { next.handle(req).await }
    })
}
