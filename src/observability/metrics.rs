//! Metrics collection and exposition.
//!
//! # Metrics
//! - `file_router_requests_total` (counter): requests by resolution outcome
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; without an installed
//!   recorder every call is a no-op
//! - The Prometheus exporter is only installed by the server binary

use std::net::SocketAddr;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// How the router disposed of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// A chain was built and handed to the dispatcher.
    Dispatched,
    /// No registered handler matches the path.
    UnresolvedPath,
    /// The handler has no implemented action for the method.
    UnmappedAction,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Dispatched => "dispatched",
            Outcome::UnresolvedPath => "unresolved_path",
            Outcome::UnmappedAction => "unmapped_action",
        }
    }
}

/// Install the Prometheus recorder with an HTTP scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one routing decision.
pub fn record_resolution(outcome: Outcome) {
    metrics::counter!("file_router_requests_total", "outcome" => outcome.as_str()).increment(1);
}
