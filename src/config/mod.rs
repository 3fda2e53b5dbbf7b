//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! command line (--backends, --port)
//!     → cli.rs (clap parse)
//!     → validation.rs (split backend list, parse each URL)
//!     → BalancerConfig (validated, immutable)
//!     → handed to startup, which builds the backend registry
//! ```
//!
//! # Design Decisions
//! - The command line is the only configuration surface
//! - Validation separates syntactic (clap) from semantic checks
//! - Every bad backend entry is reported, not just the first
//! - Any configuration error is fatal before a socket is opened

pub mod cli;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use schema::{BalancerConfig, ConfigError};
pub use validation::ValidationError;
