//! Load balancing subsystem.
//!
//! # Data Flow
//! ```text
//! Validated backend URLs (startup)
//!     → backend.rs (one Backend per URL, each with its own transport)
//!     → registry.rs (ordered, frozen once serving starts)
//!     → round_robin.rs (shared rotation cursor over the registry)
//!     → Selected backend handed to the forwarder
//! ```
//!
//! # Design Decisions
//! - Registry is immutable after build; reads need no locking
//! - The rotation cursor is the only shared mutable state
//! - Cursor advances with a single atomic fetch-add
//! - No health filtering: every backend keeps its share of traffic

pub mod backend;
pub mod registry;
pub mod round_robin;

pub use backend::Backend;
pub use registry::BackendRegistry;
pub use round_robin::{RoundRobin, SchedulerError};
