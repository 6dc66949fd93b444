//! Chain execution.
//!
//! The chain is folded from the back into nested handlers, so each
//! middleware receives everything after it as `next`. A terminal action
//! replaces whatever would have followed it; a chain without one ends in the
//! fallback.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;

use crate::dispatch::chain::{Chain, ChainEntry};
use crate::dispatch::handler::{HandlerResult, Middleware, Next, RequestHandler};

/// Executes an ordered chain against a request.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(
        &self,
        chain: Chain,
        request: Request<Body>,
        fallback: Arc<dyn RequestHandler>,
    ) -> HandlerResult;
}

/// Default dispatch engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct MiddlewareDispatcher;

impl MiddlewareDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Compose `chain` into a single handler without running it.
    pub fn build(chain: Chain, fallback: Arc<dyn RequestHandler>) -> Arc<dyn RequestHandler> {
        chain
            .into_entries()
            .into_iter()
            .rev()
            .fold(fallback, |next, entry| match entry {
                ChainEntry::Middleware(middleware) => {
                    Arc::new(MiddlewareHandler { middleware, next }) as Arc<dyn RequestHandler>
                }
                ChainEntry::Action { handler, .. } => handler,
            })
    }
}

#[async_trait]
impl Dispatch for MiddlewareDispatcher {
    async fn dispatch(
        &self,
        chain: Chain,
        request: Request<Body>,
        fallback: Arc<dyn RequestHandler>,
    ) -> HandlerResult {
        Self::build(chain, fallback).handle(request).await
    }
}

/// Internal handler that wraps a middleware with its next handler.
struct MiddlewareHandler {
    middleware: Arc<dyn Middleware>,
    next: Next,
}

#[async_trait]
impl RequestHandler for MiddlewareHandler {
    async fn handle(&self, request: Request<Body>) -> HandlerResult {
        self.middleware.process(request, Arc::clone(&self.next)).await
    }
}
