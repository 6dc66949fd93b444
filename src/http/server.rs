//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum app with the file router as its fallback service
//! - Wire up middleware (tracing, timeout, request ID)
//! - Turn errors escaping handlers into 500 responses at the outer edge
//! - Serve until the shutdown future resolves

use std::future::Future;
use std::time::Duration;

use axum::error_handling::HandleError;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Router;
use tokio::net::TcpListener;
use tower::{BoxError, Layer};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::layer::FileRouterLayer;
use crate::registry::HandlerRegistry;
use crate::routing::FileRouter;

/// HTTP server fronting a [`FileRouter`].
pub struct HttpServer {
    app: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and handlers.
    pub fn new(config: AppConfig, registry: HandlerRegistry) -> Self {
        let router = FileRouter::new(registry).with_config(config.router.clone());
        tracing::info!(
            namespace = %config.router.namespace,
            base_directory = %config.router.base_directory,
            class_postfix = %config.router.class_postfix,
            handlers = router.registry().len(),
            "File router ready"
        );

        let app = Self::build_app(&config, router);
        Self { app }
    }

    /// Build the Axum app with all middleware layers.
    #[allow(deprecated)]
    fn build_app(config: &AppConfig, router: FileRouter) -> Router {
        let not_found = Router::new().fallback(not_found_handler);
        let routed = FileRouterLayer::new(router).layer(not_found);

        Router::new()
            .fallback_service(HandleError::new(routed, handle_upstream_error))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.server.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The assembled app, for embedding or driving directly in tests.
    pub fn into_router(self) -> Router {
        self.app
    }

    /// Run the server on `listener` until `shutdown` completes.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "No handler found")
}

async fn handle_upstream_error(err: BoxError) -> (StatusCode, String) {
    tracing::error!(error = %err, "Handler failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}
