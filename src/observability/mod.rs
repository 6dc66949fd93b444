//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Router decisions produce:
//!     → tracing events (fallback reason, dispatched chain)
//!     → metrics.rs (per-outcome counters)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```

pub mod logging;
pub mod metrics;
