//! Observability for the interactive session.
//!
//! Counters describing what happened during a session, logged through
//! `tracing` when the session ends.

pub mod metrics;

pub use metrics::SessionMetrics;
