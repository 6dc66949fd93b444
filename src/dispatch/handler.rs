//! Handler and middleware contracts.
//!
//! Actions, middlewares and fallbacks all speak the same language: an axum
//! `Request<Body>` in, a `Result<Response, BoxError>` out. Errors are never
//! interpreted by the router; they travel back to whoever called it.

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::BoxError;

/// Outcome of any handler or middleware in the pipeline.
pub type HandlerResult = Result<Response, BoxError>;

/// The rest of the pipeline, as seen from inside a middleware.
pub type Next = Arc<dyn RequestHandler>;

/// Anything that turns a request into a response.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, request: Request<Body>) -> HandlerResult;
}

#[async_trait]
impl<T: RequestHandler + ?Sized> RequestHandler for Arc<T> {
    async fn handle(&self, request: Request<Body>) -> HandlerResult {
        (**self).handle(request).await
    }
}

/// A pipeline stage that may short-circuit or pass the request onward.
#[async_trait]
pub trait Middleware: Send + Sync {
    async fn process(&self, request: Request<Body>, next: Next) -> HandlerResult;

    /// Label used in logs and chain descriptions.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Adapter returned by [`handler_fn`].
#[derive(Clone)]
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap an async closure as a [`RequestHandler`].
pub fn handler_fn<F, Fut>(f: F) -> HandlerFn<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    HandlerFn { f }
}

#[async_trait]
impl<F, Fut> RequestHandler for HandlerFn<F>
where
    F: Fn(Request<Body>) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn handle(&self, request: Request<Body>) -> HandlerResult {
        (self.f)(request).await
    }
}

/// Adapter returned by [`middleware_fn`].
#[derive(Clone)]
pub struct MiddlewareFn<F> {
    name: String,
    f: F,
}

/// Wrap an async closure as a named [`Middleware`].
pub fn middleware_fn<F, Fut>(name: impl Into<String>, f: F) -> MiddlewareFn<F>
where
    F: Fn(Request<Body>, Next) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    MiddlewareFn {
        name: name.into(),
        f,
    }
}

#[async_trait]
impl<F, Fut> Middleware for MiddlewareFn<F>
where
    F: Fn(Request<Body>, Next) -> Fut + Send + Sync,
    Fut: Future<Output = HandlerResult> + Send + 'static,
{
    async fn process(&self, request: Request<Body>, next: Next) -> HandlerResult {
        (self.f)(request, next).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
