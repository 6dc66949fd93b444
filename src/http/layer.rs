//! Tower integration.
//!
//! `FileRouterLayer` turns the router into an ordinary pipeline stage: the
//! wrapped (inner) service is the fallback that receives every request the
//! router cannot resolve.

use std::sync::Arc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;
use tower::{BoxError, Layer, Service, ServiceExt};

use crate::dispatch::{HandlerResult, RequestHandler};
use crate::routing::FileRouter;

/// Layer that applies a [`FileRouter`] in front of an inner service.
#[derive(Debug, Clone)]
pub struct FileRouterLayer {
    router: FileRouter,
}

impl FileRouterLayer {
    pub fn new(router: FileRouter) -> Self {
        Self { router }
    }
}

impl<S> Layer<S> for FileRouterLayer {
    type Service = FileRouterService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        FileRouterService {
            router: self.router.clone(),
            fallback: Arc::new(ServiceHandler { inner }),
        }
    }
}

/// Service produced by [`FileRouterLayer`].
pub struct FileRouterService<S> {
    router: FileRouter,
    fallback: Arc<ServiceHandler<S>>,
}

impl<S> Clone for FileRouterService<S> {
    fn clone(&self) -> Self {
        Self {
            router: self.router.clone(),
            fallback: Arc::clone(&self.fallback),
        }
    }
}

impl<S> Service<Request<Body>> for FileRouterService<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + Sync + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send,
{
    type Response = Response;
    type Error = BoxError;
    type Future = BoxFuture<'static, Result<Response, BoxError>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // the inner service is readied per call via oneshot
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let router = self.router.clone();
        let fallback: Arc<dyn RequestHandler> = self.fallback.clone();
        Box::pin(async move { router.process(request, fallback).await })
    }
}

/// Adapts a tower service to the [`RequestHandler`] contract.
struct ServiceHandler<S> {
    inner: S,
}

#[async_trait]
impl<S> RequestHandler for ServiceHandler<S>
where
    S: Service<Request<Body>, Response = Response> + Clone + Send + Sync + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send,
{
    async fn handle(&self, request: Request<Body>) -> HandlerResult {
        self.inner.clone().oneshot(request).await.map_err(Into::into)
    }
}
