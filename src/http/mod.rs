//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, catch-all routes, tracing)
//!     → dispatch.rs (empty pool → 503, else pick next backend)
//!     → forward.rs (rewrite, strip hop-by-hop, send via backend transport)
//!     → headers.rs (used in both directions)
//!     → Send response to client
//! ```

pub mod dispatch;
pub mod forward;
pub mod headers;
pub mod server;

pub use dispatch::dispatch;
pub use forward::{Forward, ForwardError, Forwarder};
pub use server::HttpServer;
