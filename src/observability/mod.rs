//! Observability subsystem
//!
//! - Structured JSON logging
//! - Typed lifecycle events
//! - Atomic counters with a serializable snapshot
//! - Scoped BEGIN / COMPLETE / FAILED logging
//!
//! # Principles
//!
//! 1. Observability never changes query results
//! 2. Logging failures are swallowed, never propagated
//! 3. No background threads

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
#[cfg(test)]
pub use logger::{capture_log, captured_events};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::ObservationScope;
