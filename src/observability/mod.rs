//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Route builds and lookups produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → Log output (stdout)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every build event (route count, duration, outcome)
//! - Metrics are cheap; without an installed recorder they are no-ops
//! - Lookups are not logged individually above debug level

pub mod logging;
pub mod metrics;
