//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound:
//!     listener.rs (bind the serving socket)
//!     → Hand off to HTTP layer
//!
//! Outbound:
//!     Forwarder → transport.rs (pooled HTTP/1.1 client, one per backend)
//!     → Backend server
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal at startup
//! - Each backend owns its transport; connections are pooled inside it
//! - No connect or request timeout is configured

pub mod listener;
pub mod transport;

pub use listener::{bind, ListenerError};
pub use transport::{Transport, TransportError};
