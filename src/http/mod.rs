//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum app, tracing/timeout/request-id layers)
//!     → layer.rs (FileRouterService)
//!         → resolved: handler chain
//!         → unresolved: inner service (404)
//!     → Send to client
//! ```

pub mod layer;
pub mod server;

pub use layer::{FileRouterLayer, FileRouterService};
pub use server::HttpServer;
