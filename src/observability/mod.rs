//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Relay requests produce:
//!     → logging.rs (structured log events, per-request spans)
//!     → metrics.rs (outcome counters, latency histogram)
//!
//! Consumers:
//!     → stdout (fmt subscriber)
//!     → Metrics endpoint (Prometheus scrape, when enabled)
//! ```

pub mod logging;
pub mod metrics;
