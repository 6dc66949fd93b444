//! Request resolution and dispatch.
//!
//! # Responsibilities
//! - Hold the naming conventions and the frozen handler registry
//! - Run path → handler → action → chain for each request
//! - Hand unresolved requests to the fallback, untouched
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - `with_*` returns a new router; existing instances never change
//! - Exactly one of fallback or dispatch runs per request, no retries
//! - Soft misses are `None`, never errors

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};

use crate::config::RouterConfig;
use crate::dispatch::{compose, Dispatch, HandlerResult, MiddlewareDispatcher, RequestHandler};
use crate::observability::metrics::{self, Outcome};
use crate::registry::{HandlerDescriptor, HandlerRegistry};
use crate::routing::{action, resolver};

/// A handler and the action chosen on it for one request.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    pub handler: Arc<HandlerDescriptor>,
    pub action: String,
}

/// Convention-based router.
#[derive(Clone)]
pub struct FileRouter {
    config: RouterConfig,
    registry: Arc<HandlerRegistry>,
    dispatcher: Arc<dyn Dispatch>,
}

impl FileRouter {
    /// Create a router with default conventions over `registry`.
    pub fn new(registry: impl Into<Arc<HandlerRegistry>>) -> Self {
        Self {
            config: RouterConfig::default(),
            registry: registry.into(),
            dispatcher: Arc::new(MiddlewareDispatcher::new()),
        }
    }

    pub fn with_config(&self, config: RouterConfig) -> Self {
        Self {
            config,
            ..self.clone()
        }
    }

    pub fn with_base_directory(&self, directory: impl Into<String>) -> Self {
        self.with_config(self.config.with_base_directory(directory))
    }

    pub fn with_class_postfix(&self, postfix: impl Into<String>) -> Self {
        self.with_config(self.config.with_class_postfix(postfix))
    }

    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        self.with_config(self.config.with_namespace(namespace))
    }

    /// Swap the engine that executes composed chains.
    pub fn with_dispatcher(&self, dispatcher: impl Dispatch + 'static) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            ..self.clone()
        }
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Resolve a handler and action without running anything.
    pub fn resolve(&self, method: &Method, path: &str) -> Option<ResolvedRoute> {
        self.resolve_step(method, path).ok()
    }

    fn resolve_step(&self, method: &Method, path: &str) -> Result<ResolvedRoute, Outcome> {
        let handler =
            resolver::resolve(path, &self.config, &self.registry).ok_or(Outcome::UnresolvedPath)?;
        let action = action::map_action(&handler, method)
            .ok_or(Outcome::UnmappedAction)?
            .to_string();
        Ok(ResolvedRoute { handler, action })
    }

    /// Route `request` to its handler, or to `fallback` if it cannot be resolved.
    ///
    /// Errors raised by middlewares or the action are returned as-is.
    pub async fn process(
        &self,
        request: Request<Body>,
        fallback: Arc<dyn RequestHandler>,
    ) -> HandlerResult {
        let path = request.uri().path().to_string();
        let method = request.method().clone();

        let chain = self.resolve_step(&method, &path).and_then(|route| {
            compose(&route.handler, &route.action).ok_or(Outcome::UnmappedAction)
        });

        match chain {
            Ok(chain) => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    chain = ?chain.labels(),
                    "Dispatching request"
                );
                metrics::record_resolution(Outcome::Dispatched);
                self.dispatcher.dispatch(chain, request, fallback).await
            }
            Err(outcome) => {
                tracing::debug!(
                    method = %method,
                    path = %path,
                    reason = outcome.as_str(),
                    "Passing request to fallback"
                );
                metrics::record_resolution(outcome);
                fallback.handle(request).await
            }
        }
    }
}

impl std::fmt::Debug for FileRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileRouter")
            .field("config", &self.config)
            .field("handlers", &self.registry.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::handler_fn;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder, Snapshotter};
    use std::collections::HashMap;

    fn registry() -> HandlerRegistry {
        HandlerRegistry::new()
            .with(
                HandlerDescriptor::new("App\\Controller\\UsersController")
                    .action("index", handler_fn(|_req| async { Ok("users".into_response()) })),
            )
            .with(
                HandlerDescriptor::new("Other\\Controller\\UsersController")
                    .action("index", handler_fn(|_req| async { Ok("other".into_response()) })),
            )
    }

    #[test]
    fn test_resolve() {
        let router = FileRouter::new(registry());
        let route = router.resolve(&Method::GET, "/users").unwrap();
        assert_eq!(route.handler.name(), "App\\Controller\\UsersController");
        assert_eq!(route.action, "index");

        assert!(router.resolve(&Method::PATCH, "/users").is_none());
        assert!(router.resolve(&Method::GET, "/posts").is_none());
    }

    #[test]
    fn test_with_namespace_leaves_original() {
        let router = FileRouter::new(registry());
        let other = router.with_namespace("Other");

        assert_eq!(router.config().namespace, "App");
        assert_eq!(
            router.resolve(&Method::GET, "/users").unwrap().handler.name(),
            "App\\Controller\\UsersController"
        );
        assert_eq!(
            other.resolve(&Method::GET, "/users").unwrap().handler.name(),
            "Other\\Controller\\UsersController"
        );
    }

    fn counts_by_outcome(snapshotter: &Snapshotter) -> HashMap<String, u64> {
        snapshotter
            .snapshot()
            .into_vec()
            .into_iter()
            .filter(|(key, ..)| key.key().name() == "file_router_requests_total")
            .filter_map(|(key, _, _, value)| {
                let outcome = key.key().labels().find(|l| l.key() == "outcome")?.value().to_string();
                match value {
                    DebugValue::Counter(count) => Some((outcome, count)),
                    _ => None,
                }
            })
            .collect()
    }

    #[test]
    fn test_process_counts_each_outcome() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        let router = FileRouter::new(registry());
        let fallback: Arc<dyn RequestHandler> =
            Arc::new(handler_fn(|_req| async { Ok(StatusCode::NOT_FOUND.into_response()) }));

        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        ::metrics::with_local_recorder(&recorder, || {
            runtime.block_on(async {
                for (method, path) in [
                    (Method::GET, "/users"),
                    (Method::GET, "/missing"),
                    (Method::PATCH, "/users"),
                    (Method::POST, "/users"),
                ] {
                    let request = Request::builder()
                        .method(method)
                        .uri(path)
                        .body(Body::empty())
                        .unwrap();
                    router.process(request, Arc::clone(&fallback)).await.unwrap();
                }
            })
        });

        let counts = counts_by_outcome(&snapshotter);
        assert_eq!(counts.get("dispatched"), Some(&1));
        assert_eq!(counts.get("unresolved_path"), Some(&1));
        assert_eq!(counts.get("unmapped_action"), Some(&2));
    }

    #[tokio::test]
    async fn test_process_falls_back() {
        let router = FileRouter::new(registry());
        let fallback: Arc<dyn RequestHandler> =
            Arc::new(handler_fn(|_req| async { Ok(StatusCode::NOT_FOUND.into_response()) }));

        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let response = router.process(request, fallback).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
