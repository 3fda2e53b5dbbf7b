//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through `tracing`
//! - Per-request spans come from tower-http's TraceLayer
//! - Log level controlled by `RUST_LOG`

pub mod logging;

pub use logging::init_logging;
