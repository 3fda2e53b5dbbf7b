//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the backend registry from validated configuration
//! - Bind the listener and begin accepting traffic
//! - Tie OS signals to graceful shutdown
//!
//! # Design Decisions
//! - Configuration is validated by the caller; nothing here re-parses it
//! - Listener starts last (traffic only when ready)

use crate::config::BalancerConfig;
use crate::http::HttpServer;
use crate::lifecycle::{shutdown::Shutdown, signals::spawn_signal_listener};
use crate::net::{self, ListenerError};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Serve `config` until SIGINT/SIGTERM.
pub async fn run(config: BalancerConfig) -> Result<(), StartupError> {
    tracing::info!(
        port = config.port,
        backends = config.backends.len(),
        "Configuration loaded"
    );

    let server = HttpServer::new(&config);
    let listener = net::bind(config.bind_address()).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    spawn_signal_listener(shutdown);

    server.run(listener, server_shutdown).await?;
    Ok(())
}
