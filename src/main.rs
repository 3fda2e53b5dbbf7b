//! Round-robin HTTP load balancer.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request     ┌─────────┐    ┌──────────┐    ┌─────────────┐
//!     ──────────────────▶│  http   │───▶│ dispatch │───▶│ round_robin │
//!                        │ server  │    └────┬─────┘    │  scheduler  │
//!                        └─────────┘         │          └─────────────┘
//!                                            ▼
//!     Client Response    ┌─────────┐    ┌──────────┐
//!     ◀──────────────────│ forward │───▶│ backend  │◀────────────▶ Backend
//!                        └─────────┘    │transport │               Server
//!                                       └──────────┘
//! ```
//!
//! Usage: `http-balancer --backends http://10.0.0.1:8080,http://10.0.0.2:8080 --port 3000`

use std::process::ExitCode;

use clap::Parser;

use http_balancer::config::{BalancerConfig, Cli};
use http_balancer::lifecycle::startup;
use http_balancer::observability::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let config = match BalancerConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = startup::run(config).await {
        tracing::error!(error = %e, "Load balancer failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
